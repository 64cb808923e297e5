//! 展示层：模板标签 / 短代码与统计面板的 HTML 片段

mod shortcode;
mod stats_panel;

pub use shortcode::{ShortcodeAttrs, shortlink_tag};
pub use stats_panel::{STATS_ERROR_LINE, stats_panel};
