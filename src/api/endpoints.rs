//! 服务商 API 端点注册表
//!
//! 集中维护 Bitly v3 的请求路径。服务商升级 API 时只需要改这里。
//! 模板使用 `{0}`、`{1}` 位置占位符：先填凭据参数，再填主体参数
//! （长链接或短链接）。所有参数在 [`Endpoints::url`] 中统一做 URL 编码。

use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};
use tracing::error;

use crate::errors::{PostlinkerError, Result};
use crate::models::Credentials;

/// Bitly OAuth API 默认地址
pub const DEFAULT_API_BASE: &str = "https://api-ssl.bitly.com";

/// 服务商操作名称（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    Shorten,
    Expand,
    UserInfo,
    LinkClicks,
    ReferringDomains,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// 带位置占位符的 URL 模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 单遍填充 `{0}`、`{1}` ... 占位符，已填入的值不会被再次扫描
    ///
    /// 参数个数不足时返回 `InvalidRequest`，多余参数会被忽略
    pub fn fill(&self, params: &[&str]) -> Result<String> {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                return Ok(out);
            };

            match after[..end].parse::<usize>() {
                Ok(index) => {
                    let value = params.get(index).ok_or_else(|| {
                        PostlinkerError::invalid_request(format!(
                            "URL template {} expects parameter {{{}}}",
                            self.0, index
                        ))
                    })?;
                    out.push_str(value);
                }
                Err(_) => out.push_str(&rest[start..start + end + 2]),
            }
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// 端点注册表
///
/// 模板形状由凭据方案决定，构造时确定一次
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
    legacy: bool,
}

impl Endpoints {
    pub fn new(base: impl Into<String>, credentials: &Credentials) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            legacy: matches!(credentials, Credentials::Legacy { .. }),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// 获取操作对应的完整 URL 模板
    pub fn endpoint(&self, operation: Operation) -> UrlTemplate {
        let path = if self.legacy {
            legacy_path(operation)
        } else {
            oauth_path(operation)
        };
        UrlTemplate(format!("{}{}", self.base, path))
    }

    /// 按名称查找端点
    ///
    /// 名称不在封闭集合内属于调用方的编程错误，会以 error 级别记录
    pub fn lookup(&self, name: &str) -> Result<UrlTemplate> {
        match Operation::from_str(name) {
            Ok(op) => Ok(self.endpoint(op)),
            Err(_) => {
                error!("Unknown API endpoint requested: {}", name);
                Err(PostlinkerError::unknown_endpoint(format!(
                    "'{}' is not one of: {}",
                    name,
                    Operation::iter()
                        .map(|op| op.as_ref().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )))
            }
        }
    }

    /// 填充凭据与主体参数（原始值，在此编码），生成可直接请求的 URL
    pub fn url(
        &self,
        operation: Operation,
        credentials: &Credentials,
        subject: Option<&str>,
    ) -> Result<String> {
        let encoded: Vec<String> = credentials
            .url_params()
            .into_iter()
            .chain(subject)
            .map(|p| urlencoding::encode(p).into_owned())
            .collect();
        let params: Vec<&str> = encoded.iter().map(String::as_str).collect();
        self.endpoint(operation).fill(&params)
    }
}

fn oauth_path(operation: Operation) -> &'static str {
    match operation {
        Operation::Shorten => "/v3/shorten?access_token={0}&longUrl={1}",
        Operation::Expand => "/v3/expand?access_token={0}&shortUrl={1}",
        Operation::UserInfo => "/v3/user/info?access_token={0}",
        Operation::LinkClicks => "/v3/link/clicks?access_token={0}&link={1}",
        Operation::ReferringDomains => "/v3/link/referring_domains?access_token={0}&link={1}",
    }
}

// 旧版 login/apiKey 方案，user-info 对应 validate 接口
fn legacy_path(operation: Operation) -> &'static str {
    match operation {
        Operation::Shorten => "/v3/shorten?login={0}&apiKey={1}&longUrl={2}&format=json",
        Operation::Expand => "/v3/expand?login={0}&apiKey={1}&shortUrl={2}&format=json",
        Operation::UserInfo => {
            "/v3/validate?x_login={0}&x_apiKey={1}&login={0}&apiKey={1}&format=json"
        }
        Operation::LinkClicks => "/v3/link/clicks?login={0}&apiKey={1}&link={2}&format=json",
        Operation::ReferringDomains => {
            "/v3/link/referring_domains?login={0}&apiKey={1}&link={2}&format=json"
        }
    }
}
