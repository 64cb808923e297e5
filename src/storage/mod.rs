//! 宿主平台存储抽象
//!
//! - `MetaStore`: 每个内容条目上的单个元数据字段（短链缓存）
//! - `ContentSource`: 内容条目的只读访问
//!
//! 宿主平台的存储是权威来源；这里只提供内存实现供嵌入方与测试使用。

mod content_source;
mod memory;
mod meta_store;

pub use content_source::{ContentSource, MemoryContentSource};
pub use memory::MemoryMetaStore;
pub use meta_store::MetaStore;
