//! 出站 HTTP 适配层
//!
//! 优先使用 ureq（支持 TLS），未编译该 feature 或配置强制时回退到
//! `std::net` 的纯 HTTP/1.0 读取。只尝试一次，不重试，不缓存。
//! 任何失败都以 [`ApiResponse::Failed`] 返回，不会向上抛出。

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::{ApiConfig, TransportKind};
use crate::errors::{PostlinkerError, Result};
use crate::utils::{parse_http_url, redact_query};

/// 原始 HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// 服务商调用结果：解码后的 JSON 或失败标记
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Failed(PostlinkerError),
}

impl ApiResponse {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&PostlinkerError> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Json(_) => None,
        }
    }
}

/// 阻塞式 HTTP 传输
pub trait Transport: Send + Sync {
    /// 发起一次 GET 请求
    fn get(&self, url: &str, timeout: Duration) -> Result<RawResponse>;

    /// 获取传输名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 基于 ureq 的原生传输
#[cfg(feature = "ureq")]
pub struct UreqTransport {
    agent: ureq::Agent,
}

#[cfg(feature = "ureq")]
impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

#[cfg(feature = "ureq")]
impl Transport for UreqTransport {
    fn get(&self, url: &str, _timeout: Duration) -> Result<RawResponse> {
        let resp = self.agent.get(url).call()?;
        let status = resp.status().as_u16();
        let body = resp.into_body().read_to_string()?;
        Ok(RawResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "ureq"
    }
}

/// 纯 `std::net` 传输，仅支持 http://
pub struct PlainTransport;

impl PlainTransport {
    fn parse_response(raw: &[u8]) -> Result<RawResponse> {
        let text = String::from_utf8_lossy(raw);
        let (head, body) = text
            .split_once("\r\n\r\n")
            .ok_or_else(|| PostlinkerError::invalid_response("Malformed HTTP response"))?;

        let status = head
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|code| code.parse::<u16>().ok())
            .ok_or_else(|| PostlinkerError::invalid_response("Missing HTTP status line"))?;

        Ok(RawResponse {
            status,
            body: body.to_string(),
        })
    }
}

impl Transport for PlainTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<RawResponse> {
        let parsed = parse_http_url(url)?;
        if parsed.scheme() != "http" {
            return Err(PostlinkerError::transport_failure(format!(
                "{} transport only supports http://, enable the `ureq` feature for {}",
                self.name(),
                parsed.scheme()
            )));
        }

        let host = parsed.host_str().unwrap_or_default();
        let port = parsed.port_or_known_default().unwrap_or(80);
        let addr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| PostlinkerError::transport_failure(format!("Cannot resolve {}", host)))?;

        let mut stream = TcpStream::connect_timeout(&addr, timeout)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;

        let target = match parsed.query() {
            Some(q) => format!("{}?{}", parsed.path(), q),
            None => parsed.path().to_string(),
        };
        let host_header = match parsed.port() {
            Some(p) => format!("{}:{}", host, p),
            None => host.to_string(),
        };
        write!(
            stream,
            "GET {} HTTP/1.0\r\nHost: {}\r\nAccept: application/json\r\nUser-Agent: postlinker/{}\r\nConnection: close\r\n\r\n",
            target,
            host_header,
            env!("CARGO_PKG_VERSION")
        )?;
        stream.flush()?;

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw)?;
        Self::parse_response(&raw)
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

/// HTTP 客户端：选择传输、执行请求、解码 JSON
pub struct HttpClient {
    transport: Box<dyn Transport>,
    timeout: Duration,
}

impl HttpClient {
    /// 根据配置选择传输
    ///
    /// - `auto`：编译了 ureq 则使用 ureq，否则使用 plain
    /// - `native`：同 auto，但在缺少 ureq 时记录警告
    /// - `plain`：始终使用 plain
    pub fn from_config(config: &ApiConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let transport: Box<dyn Transport> = match config.transport {
            TransportKind::Plain => Box::new(PlainTransport),
            TransportKind::Auto | TransportKind::Native => native_or_plain(config, timeout),
        };
        debug!("HTTP client initialized with {} transport", transport.name());
        Self { transport, timeout }
    }

    pub fn with_transport(transport: Box<dyn Transport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 请求 URL 并解码 JSON
    pub fn fetch(&self, url: &str) -> ApiResponse {
        match self.try_fetch(url) {
            Ok(json) => ApiResponse::Json(json),
            Err(e) => {
                warn!(
                    "API request to {} failed: {}",
                    redact_query(url),
                    e.format_simple()
                );
                ApiResponse::Failed(e)
            }
        }
    }

    fn try_fetch(&self, url: &str) -> Result<Value> {
        parse_http_url(url)?;

        trace!("GET {} via {}", redact_query(url), self.transport.name());
        let resp = self.transport.get(url, self.timeout)?;

        if resp.status != 200 {
            return Err(PostlinkerError::provider_rejected(format!(
                "HTTP status {}",
                resp.status
            )));
        }
        if resp.body.trim().is_empty() {
            return Err(PostlinkerError::invalid_response("Empty response body"));
        }

        Ok(serde_json::from_str(&resp.body)?)
    }
}

#[cfg(feature = "ureq")]
fn native_or_plain(_config: &ApiConfig, timeout: Duration) -> Box<dyn Transport> {
    Box::new(UreqTransport::new(timeout))
}

#[cfg(not(feature = "ureq"))]
fn native_or_plain(config: &ApiConfig, _timeout: Duration) -> Box<dyn Transport> {
    if config.transport == TransportKind::Native {
        warn!("Native transport requested but the `ureq` feature is disabled, using plain transport");
    }
    Box::new(PlainTransport)
}
