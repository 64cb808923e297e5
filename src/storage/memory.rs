use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use super::meta_store::MetaStore;
use crate::models::ItemId;

/// 内存元数据存储
pub struct MemoryMetaStore {
    field: String,
    data: RwLock<HashMap<ItemId, String>>,
}

impl MemoryMetaStore {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            data: RwLock::new(HashMap::new()),
        }
    }

    /// 预置缓存值
    pub fn with_entry(self, item: impl Into<ItemId>, value: impl Into<String>) -> Self {
        self.data.write().insert(item.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.data.read().contains_key(&item)
    }
}

impl MetaStore for MemoryMetaStore {
    fn get(&self, item: ItemId) -> Option<String> {
        self.data
            .read()
            .get(&item)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    fn set(&self, item: ItemId, value: String) {
        trace!("meta[{}:{}] = {}", item, self.field, value);
        self.data.write().insert(item, value);
    }

    fn delete(&self, item: ItemId) {
        trace!("meta[{}:{}] deleted", item, self.field);
        self.data.write().remove(&item);
    }

    fn field_name(&self) -> &str {
        &self.field
    }
}
