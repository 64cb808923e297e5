use tracing::warn;

use crate::utils::{html, validate_url};

/// 短代码属性：`[wpbitly text="" title="" before="" after=""]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeAttrs {
    /// 链接文本，为空时显示短链本身
    pub text: String,
    pub title: String,
    /// 包裹在链接前后的 HTML，原样输出
    pub before: String,
    pub after: String,
}

impl ShortcodeAttrs {
    /// 从键值对构造，忽略未知属性
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attrs = Self::default();
        for (key, value) in pairs {
            match key.as_ref().trim().to_ascii_lowercase().as_str() {
                "text" => attrs.text = value.into(),
                "title" => attrs.title = value.into(),
                "before" => attrs.before = value.into(),
                "after" => attrs.after = value.into(),
                _ => {}
            }
        }
        attrs
    }
}

/// 生成短链锚点
///
/// 没有短链（或短链不是 http(s) URL）时返回空字符串
pub fn shortlink_tag(shortlink: Option<&str>, attrs: &ShortcodeAttrs) -> String {
    let Some(url) = shortlink.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    if let Err(e) = validate_url(url) {
        warn!("Refusing to render shortlink {:?}: {}", url, e);
        return String::new();
    }

    let text = if attrs.text.is_empty() { url } else { attrs.text.as_str() };
    let title = if attrs.title.is_empty() {
        String::new()
    } else {
        format!(" title=\"{}\"", html::escape(&attrs.title))
    };

    format!(
        "{}<a rel=\"shortlink\" href=\"{}\"{}>{}</a>{}",
        attrs.before,
        html::escape(url),
        title,
        html::escape(text),
        attrs.after
    )
}
