use std::collections::BTreeSet;

/// 允许自动生成短链的内容类型集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedTypes(BTreeSet<String>);

impl AllowedTypes {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            types
                .into_iter()
                .map(|t| {
                    let t: String = t.into();
                    t.trim().to_string()
                })
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    /// 只保留宿主平台公开的类型，未知类型被丢弃
    pub fn sanitize<I, S>(requested: I, public_types: &[&str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allowed = Self::new(requested);
        allowed.0.retain(|t| public_types.contains(&t.as_str()));
        allowed
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.0.contains(kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
