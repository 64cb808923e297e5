use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::api::HttpClient;
use crate::config::AppConfig;
use crate::services::CredentialState;
use crate::storage::{ContentSource, MetaStore};

/// 插件运行所需的全部状态，启动时构造一次后按所有权传递
pub struct PluginContext {
    pub config: AppConfig,
    pub credentials: CredentialState,
    pub store: Arc<dyn MetaStore>,
    pub content: Arc<dyn ContentSource>,
    pub client: HttpClient,
}

impl PluginContext {
    /// 使用配置选择的 HTTP 传输
    pub fn new(
        config: AppConfig,
        store: Arc<dyn MetaStore>,
        content: Arc<dyn ContentSource>,
    ) -> Self {
        let client = HttpClient::from_config(&config.api);
        Self::with_client(config, store, content, client)
    }

    /// 使用外部提供的 HTTP 客户端（嵌入方自定义传输时使用）
    pub fn with_client(
        config: AppConfig,
        store: Arc<dyn MetaStore>,
        content: Arc<dyn ContentSource>,
        client: HttpClient,
    ) -> Self {
        if store.field_name() != config.shortlinks.meta_key {
            warn!(
                "Metadata store field '{}' differs from configured shortlinks.meta_key '{}'",
                store.field_name(),
                config.shortlinks.meta_key
            );
        }
        let credentials = CredentialState::from_config(&config.auth);
        Self {
            config,
            credentials,
            store,
            content,
            client,
        }
    }
}

/// 从配置文件准备插件上下文
pub fn prepare_context(
    config_path: impl AsRef<Path>,
    store: Arc<dyn MetaStore>,
    content: Arc<dyn ContentSource>,
) -> Result<PluginContext> {
    let start_time = std::time::Instant::now();
    let config_path = config_path.as_ref();

    let config = AppConfig::load_from(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    debug!("Configuration loaded from {}", config_path.display());

    // 缓存字段由配置决定，宿主提供的存储必须指向同一字段
    if store.field_name() != config.shortlinks.meta_key {
        bail!(
            "Metadata store field '{}' does not match shortlinks.meta_key '{}'",
            store.field_name(),
            config.shortlinks.meta_key
        );
    }

    let ctx = PluginContext::new(config, store, content);
    info!(
        "Plugin context ready in {:?} (transport: {}, authorized: {}, meta field: {})",
        start_time.elapsed(),
        ctx.client.transport_name(),
        ctx.credentials.is_authorized(),
        ctx.store.field_name()
    );
    Ok(ctx)
}
