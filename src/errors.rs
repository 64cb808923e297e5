use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostlinkerError {
    TransportFailure(String),
    InvalidResponse(String),
    ProviderRejected(String),
    NotAuthorized(String),
    NotEligible(String),
    UnknownEndpoint(String),
    InvalidRequest(String),
    Config(String),
    Serialization(String),
}

impl PostlinkerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            PostlinkerError::TransportFailure(_) => "E001",
            PostlinkerError::InvalidResponse(_) => "E002",
            PostlinkerError::ProviderRejected(_) => "E003",
            PostlinkerError::NotAuthorized(_) => "E004",
            PostlinkerError::NotEligible(_) => "E005",
            PostlinkerError::UnknownEndpoint(_) => "E006",
            PostlinkerError::InvalidRequest(_) => "E007",
            PostlinkerError::Config(_) => "E008",
            PostlinkerError::Serialization(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            PostlinkerError::TransportFailure(_) => "Transport Failure",
            PostlinkerError::InvalidResponse(_) => "Invalid Response",
            PostlinkerError::ProviderRejected(_) => "Provider Rejected",
            PostlinkerError::NotAuthorized(_) => "Not Authorized",
            PostlinkerError::NotEligible(_) => "Not Eligible",
            PostlinkerError::UnknownEndpoint(_) => "Unknown Endpoint",
            PostlinkerError::InvalidRequest(_) => "Invalid Request",
            PostlinkerError::Config(_) => "Configuration Error",
            PostlinkerError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            PostlinkerError::TransportFailure(msg) => msg,
            PostlinkerError::InvalidResponse(msg) => msg,
            PostlinkerError::ProviderRejected(msg) => msg,
            PostlinkerError::NotAuthorized(msg) => msg,
            PostlinkerError::NotEligible(msg) => msg,
            PostlinkerError::UnknownEndpoint(msg) => msg,
            PostlinkerError::InvalidRequest(msg) => msg,
            PostlinkerError::Config(msg) => msg,
            PostlinkerError::Serialization(msg) => msg,
        }
    }

    /// 是否为服务商侧的失败（传输、响应格式、服务商拒绝）
    ///
    /// 这类错误在解析引擎内部被吸收，调用方只会看到 "暂无短链"
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            PostlinkerError::TransportFailure(_)
                | PostlinkerError::InvalidResponse(_)
                | PostlinkerError::ProviderRejected(_)
        )
    }

    /// 格式化为彩色输出（用于终端日志）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PostlinkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PostlinkerError {}

// 便捷的构造函数
impl PostlinkerError {
    pub fn transport_failure<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::TransportFailure(msg.into())
    }

    pub fn invalid_response<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::InvalidResponse(msg.into())
    }

    pub fn provider_rejected<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::ProviderRejected(msg.into())
    }

    pub fn not_authorized<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::NotAuthorized(msg.into())
    }

    pub fn not_eligible<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::NotEligible(msg.into())
    }

    pub fn unknown_endpoint<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::UnknownEndpoint(msg.into())
    }

    pub fn invalid_request<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::InvalidRequest(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::Config(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        PostlinkerError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for PostlinkerError {
    fn from(err: std::io::Error) -> Self {
        PostlinkerError::TransportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for PostlinkerError {
    fn from(err: serde_json::Error) -> Self {
        PostlinkerError::InvalidResponse(err.to_string())
    }
}

impl From<config::ConfigError> for PostlinkerError {
    fn from(err: config::ConfigError) -> Self {
        PostlinkerError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PostlinkerError {
    fn from(err: toml::ser::Error) -> Self {
        PostlinkerError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for PostlinkerError {
    fn from(err: url::ParseError) -> Self {
        PostlinkerError::InvalidRequest(err.to_string())
    }
}

// 传输层关闭了 http_status_as_error，HTTP 状态码由 HttpClient 统一判定
#[cfg(feature = "ureq")]
impl From<ureq::Error> for PostlinkerError {
    fn from(err: ureq::Error) -> Self {
        PostlinkerError::TransportFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PostlinkerError>;
