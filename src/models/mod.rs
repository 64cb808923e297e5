//! 数据模型：内容条目、凭据、类型白名单、点击统计

mod allowed_types;
mod content;
mod credentials;
mod stats;

pub use allowed_types::AllowedTypes;
pub use content::{ContentItem, ContentStatus, ItemId};
pub use credentials::Credentials;
pub use stats::{ClickStats, ReferringDomain};
