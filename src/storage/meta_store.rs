use crate::models::ItemId;

/// 元数据存储 trait
///
/// 每个实例对应一个固定字段名；不要求事务，后写覆盖先写
pub trait MetaStore: Send + Sync {
    /// 读取条目的缓存值，空字符串视为不存在
    fn get(&self, item: ItemId) -> Option<String>;

    fn set(&self, item: ItemId, value: String);

    fn delete(&self, item: ItemId);

    /// 字段名（用于日志）
    fn field_name(&self) -> &str;
}
