//! 配置加载
//!
//! 优先级：ENV > TOML 文件 > 默认值
//! ENV 前缀：PL，分隔符：__
//! 示例：PL__API__TIMEOUT_SECS=10

mod structs;

pub use structs::*;

use std::path::Path;

use config::{Config, Environment, File};

use crate::errors::Result;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "postlinker.toml";

impl AppConfig {
    /// 从默认路径加载配置
    ///
    /// 日志系统此时尚未初始化，出错时输出到 stderr 并回退到默认值
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        match Self::load_from(DEFAULT_CONFIG_PATH) {
            Ok(config) => {
                if Path::new(DEFAULT_CONFIG_PATH).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", DEFAULT_CONFIG_PATH);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 从指定 TOML 文件（可选）与环境变量加载配置
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::from(path).required(false))
            // 2. 从环境变量覆盖，前缀 PL，分隔符 __
            .add_source(
                Environment::with_prefix("PL")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("shortlinks.post_types")
                    .with_list_parse_key("shortlinks.eligible_statuses")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    ///
    /// 设置界面保存凭据校验结果时调用
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::errors::PostlinkerError::config(e.to_string()))?;
        }

        std::fs::write(path, content)
            .map_err(|e| crate::errors::PostlinkerError::config(e.to_string()))?;
        Ok(())
    }
}
