//! 响应校验
//!
//! 读取任何字段之前必须先通过这里的校验，调用方不直接检查原始响应。

use serde_json::Value;

use super::endpoints::Operation;
use super::http::ApiResponse;

/// 服务商成功状态码
pub const STATUS_OK: u64 = 200;

/// 校验模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// 必须包含 `status_code == 200`
    StatusChecked,
    /// 能解码为 JSON 对象即可
    Decodable,
}

impl Operation {
    /// 各操作响应形状对应的校验模式
    ///
    /// `user-info`（及旧版 `validate`）由凭据校验检查具体字段，不依赖状态码
    pub fn validation_mode(&self) -> ValidationMode {
        match self {
            Operation::UserInfo => ValidationMode::Decodable,
            Operation::Shorten
            | Operation::Expand
            | Operation::LinkClicks
            | Operation::ReferringDomains => ValidationMode::StatusChecked,
        }
    }
}

pub fn is_valid(response: &ApiResponse, mode: ValidationMode) -> bool {
    validate(response, mode).is_some()
}

/// 唯一的字段访问入口：通过校验后返回解码后的 JSON
pub fn validate(response: &ApiResponse, mode: ValidationMode) -> Option<&Value> {
    let json = match response {
        ApiResponse::Json(json) => json,
        ApiResponse::Failed(_) => return None,
    };

    if !json.is_object() {
        return None;
    }

    match mode {
        ValidationMode::Decodable => Some(json),
        ValidationMode::StatusChecked => status_code(json)
            .filter(|code| *code == STATUS_OK)
            .map(|_| json),
    }
}

// 部分旧接口以字符串形式返回状态码
fn status_code(json: &Value) -> Option<u64> {
    match &json["status_code"] {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
