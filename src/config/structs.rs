use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_BASE;
use crate::errors::{PostlinkerError, Result};
use crate::models::{ContentStatus, Credentials};

/// 插件配置（从 TOML 与环境变量加载，启动时构造一次）
///
/// 包含：
/// - api: 服务商地址、超时、传输方式
/// - auth: 凭据与授权状态
/// - shortlinks: 生成范围与缓存字段
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub shortlinks: ShortlinkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 校验配置取值
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(PostlinkerError::config("api.base_url cannot be empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(PostlinkerError::config("api.timeout_secs must be greater than 0"));
        }
        if self.shortlinks.meta_key.trim().is_empty() {
            return Err(PostlinkerError::config("shortlinks.meta_key cannot be empty"));
        }
        Ok(())
    }
}

/// 出站传输选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Auto,
    Native,
    Plain,
}

/// 服务商 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub transport: TransportKind,
}

/// 授权配置
///
/// `authorized` 由设置界面在保存凭据时校验后写入，核心只读取
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuthConfig {
    #[serde(default)]
    pub authorized: bool,
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

/// 短链生成配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortlinkConfig {
    /// 自动生成短链的内容类型
    #[serde(default = "default_post_types")]
    pub post_types: Vec<String>,
    /// 允许生成短链的内容状态
    #[serde(default = "default_eligible_statuses")]
    pub eligible_statuses: Vec<ContentStatus>,
    /// 元数据字段名
    #[serde(default = "default_meta_key")]
    pub meta_key: String,
    /// 缓存校验失败时是否先删除旧值
    #[serde(default)]
    pub delete_stale: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_post_types() -> Vec<String> {
    vec!["post".to_string(), "page".to_string()]
}

fn default_eligible_statuses() -> Vec<ContentStatus> {
    vec![
        ContentStatus::Published,
        ContentStatus::Scheduled,
        ContentStatus::Private,
    ]
}

fn default_meta_key() -> String {
    "_shortlink".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            transport: TransportKind::default(),
        }
    }
}

impl Default for ShortlinkConfig {
    fn default() -> Self {
        Self {
            post_types: default_post_types(),
            eligible_statuses: default_eligible_statuses(),
            meta_key: default_meta_key(),
            delete_stale: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}
