use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// 内容条目 ID（宿主平台分配，稳定不变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 内容状态
///
/// 除了规范名称外，也接受宿主平台的原生写法（`publish`、`future`、`inherit`）
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentStatus {
    #[default]
    Draft,
    #[serde(alias = "publish")]
    #[strum(to_string = "published", serialize = "publish")]
    Published,
    #[serde(alias = "future")]
    #[strum(to_string = "scheduled", serialize = "future")]
    Scheduled,
    Private,
    #[serde(alias = "inherit")]
    #[strum(to_string = "revision", serialize = "inherit")]
    Revision,
    Autosave,
    Other,
}

impl ContentStatus {
    /// 修订版本或自动保存快照，需要回溯到父条目
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Revision | Self::Autosave)
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// 内容条目（文章、页面或自定义类型）
///
/// 核心只读取 ID、状态、类型与固定链接，从不创建或删除条目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub status: ContentStatus,
    /// 类型标签，如 `post`、`page`
    #[serde(rename = "type")]
    pub kind: String,
    /// 固定链接，仅在发布或定时发布后可用
    #[serde(default)]
    pub permalink: Option<String>,
    /// 修订版本 / 自动保存所属的规范条目
    #[serde(default)]
    pub parent: Option<ItemId>,
}

impl ContentItem {
    pub fn new(id: impl Into<ItemId>, kind: impl Into<String>, status: ContentStatus) -> Self {
        Self {
            id: id.into(),
            status,
            kind: kind.into(),
            permalink: None,
            parent: None,
        }
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<ItemId>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}
