use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::{ContentItem, ItemId};

/// 宿主平台内容访问
pub trait ContentSource: Send + Sync {
    fn get_item(&self, id: ItemId) -> Option<ContentItem>;

    /// 当前请求正在渲染的条目（模板标签未传 ID 时使用）
    fn current_item(&self) -> Option<ContentItem> {
        None
    }
}

/// 内存内容源
#[derive(Default)]
pub struct MemoryContentSource {
    items: RwLock<HashMap<ItemId, ContentItem>>,
    current: RwLock<Option<ItemId>>,
}

impl MemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, item: ContentItem) {
        self.items.write().insert(item.id, item);
    }

    pub fn set_current(&self, id: Option<ItemId>) {
        *self.current.write() = id;
    }
}

impl ContentSource for MemoryContentSource {
    fn get_item(&self, id: ItemId) -> Option<ContentItem> {
        self.items.read().get(&id).cloned()
    }

    fn current_item(&self) -> Option<ContentItem> {
        let current = (*self.current.read())?;
        self.get_item(current)
    }
}
