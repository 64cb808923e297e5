use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use super::startup::{PluginContext, prepare_context};
use crate::config::AuthConfig;
use crate::models::{ClickStats, Credentials, ItemId};
use crate::render::{ShortcodeAttrs, shortlink_tag, stats_panel};
use crate::services::{CredentialValidator, ShortlinkResolver};
use crate::storage::{ContentSource, MetaStore};

/// 宿主平台入口
///
/// 保存钩子与 `get_shortlink` 过滤器只在授权时启用（启动时或凭据变更时确定）；
/// 模板标签与统计面板始终可用，由解析引擎自行判断是否生成。
pub struct Plugin {
    resolver: ShortlinkResolver,
    hooks_active: bool,
}

impl Plugin {
    pub fn bootstrap(ctx: PluginContext) -> Self {
        let hooks_active = ctx.credentials.is_authorized();
        if hooks_active {
            info!("Shortlink hooks registered");
        } else {
            info!("Provider not authorized, shortlink hooks inactive");
        }
        Self {
            resolver: ShortlinkResolver::new(ctx),
            hooks_active,
        }
    }

    pub fn bootstrap_from_file(
        config_path: impl AsRef<Path>,
        store: Arc<dyn MetaStore>,
        content: Arc<dyn ContentSource>,
    ) -> anyhow::Result<Self> {
        let ctx = prepare_context(config_path, store, content)?;
        Ok(Self::bootstrap(ctx))
    }

    pub fn resolver(&self) -> &ShortlinkResolver {
        &self.resolver
    }

    pub fn hooks_active(&self) -> bool {
        self.hooks_active
    }

    /// 内容保存事件
    pub fn on_content_saved(&self, id: ItemId) -> Option<String> {
        if !self.hooks_active {
            return None;
        }
        self.resolver.resolve_id(id)
    }

    /// `get_shortlink` 扩展点
    ///
    /// `shortlink` 为宿主给出的默认值。已有缓存直接返回（不校验），否则生成；
    /// 未传 ID 时使用当前条目，仍然没有条目时原样返回宿主的默认值
    pub fn get_shortlink(&self, shortlink: Option<String>, id: Option<ItemId>) -> Option<String> {
        if !self.hooks_active {
            return shortlink;
        }
        let Some(id) = id.or_else(|| self.current_id()) else {
            return shortlink;
        };
        self.resolver.cached(id).or_else(|| self.resolver.resolve_id(id))
    }

    /// 模板标签：解析短链并渲染为锚点，没有短链时返回空字符串
    pub fn shortlink(&self, id: Option<ItemId>, attrs: &ShortcodeAttrs) -> String {
        let link = match id {
            Some(id) => self.resolver.resolve_id(id),
            None => self
                .resolver
                .context()
                .content
                .current_item()
                .and_then(|item| self.resolver.resolve(&item)),
        };
        shortlink_tag(link.as_deref(), attrs)
    }

    /// `[wpbitly ...]` 短代码，作用于当前条目
    pub fn shortcode<I, K, V>(&self, attrs: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.shortlink(None, &ShortcodeAttrs::from_pairs(attrs))
    }

    /// 统计面板只对启用类型且已缓存短链的条目显示
    pub fn has_stats_panel(&self, id: ItemId) -> bool {
        self.stats_shortlink(id).is_some()
    }

    pub fn click_stats(&self, id: ItemId) -> Option<ClickStats> {
        let shortlink = self.stats_shortlink(id)?;
        self.resolver.fetch_click_stats(&shortlink)
    }

    /// 渲染统计面板；条目不显示面板时返回 `None`
    pub fn stats_panel_for(&self, id: ItemId) -> Option<String> {
        let shortlink = self.stats_shortlink(id)?;
        let stats = self.resolver.fetch_click_stats(&shortlink);
        Some(stats_panel(stats.as_ref()))
    }

    /// 设置界面保存凭据：变化时校验，返回需要持久化的授权配置
    pub fn update_credentials(&mut self, credentials: Credentials) -> AuthConfig {
        let ctx = self.resolver.context_mut();
        let validator = CredentialValidator::new(&ctx.client, &ctx.config.api.base_url);
        let authorized = ctx.credentials.set_credentials_if_changed(credentials, &validator);

        ctx.config.auth = ctx.credentials.to_config();
        self.hooks_active = authorized;
        debug!("Credentials updated, hooks_active={}", authorized);
        ctx.config.auth.clone()
    }

    /// 断开账号，返回需要持久化的授权配置
    pub fn disconnect(&mut self) -> AuthConfig {
        let ctx = self.resolver.context_mut();
        ctx.credentials.disconnect();
        ctx.config.auth = ctx.credentials.to_config();
        self.hooks_active = false;
        ctx.config.auth.clone()
    }

    fn stats_shortlink(&self, id: ItemId) -> Option<String> {
        let item = self.resolver.context().content.get_item(id)?;
        if !self.resolver.allowed_types().contains(&item.kind) {
            debug!("No stats panel for item {} of type '{}'", id, item.kind);
            return None;
        }
        self.resolver.cached(id)
    }

    fn current_id(&self) -> Option<ItemId> {
        self.resolver
            .context()
            .content
            .current_item()
            .map(|item| item.id)
    }
}
