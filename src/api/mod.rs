//! 短链服务商 API 访问层
//!
//! - `endpoints`: 操作名到 URL 模板的映射
//! - `http`: 出站请求与 JSON 解码
//! - `validator`: 响应成功与否的唯一判定入口

pub mod endpoints;
pub mod http;
pub mod validator;

pub use endpoints::{DEFAULT_API_BASE, Endpoints, Operation, UrlTemplate};
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use http::{ApiResponse, HttpClient, PlainTransport, RawResponse, Transport};
pub use validator::{ValidationMode, is_valid};
