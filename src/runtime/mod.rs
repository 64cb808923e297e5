//! 插件生命周期
//!
//! - `startup`: 构造一次 `PluginContext`，显式传入各组件
//! - `plugin`: 宿主事件入口（保存钩子、短链过滤器、模板标签、统计面板）

mod plugin;
mod startup;

pub use plugin::Plugin;
pub use startup::{PluginContext, prepare_context};
