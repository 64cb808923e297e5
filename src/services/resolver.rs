//! 短链解析引擎
//!
//! 对一个内容条目返回其短链：
//! 1. 快照回溯到父条目，再检查授权、类型、状态
//! 2. 有缓存时调用 `expand` 校验是否仍指向当前固定链接
//! 3. 无缓存或缓存过期时调用 `shorten` 并写回元数据
//!
//! 服务商侧的任何失败都在这里吸收，调用方只会看到 `None`。

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::api::{ApiResponse, Endpoints, Operation, validator};
use crate::errors::{PostlinkerError, Result};
use crate::models::{AllowedTypes, ClickStats, ContentItem, ContentStatus, ItemId, ReferringDomain};
use crate::runtime::PluginContext;
use crate::services::CredentialState;

pub struct ShortlinkResolver {
    ctx: PluginContext,
    allowed_types: AllowedTypes,
}

impl ShortlinkResolver {
    pub fn new(ctx: PluginContext) -> Self {
        let allowed_types = AllowedTypes::new(ctx.config.shortlinks.post_types.iter().cloned());
        Self { ctx, allowed_types }
    }

    pub fn context(&self) -> &PluginContext {
        &self.ctx
    }

    pub fn allowed_types(&self) -> &AllowedTypes {
        &self.allowed_types
    }

    pub fn credentials(&self) -> &CredentialState {
        &self.ctx.credentials
    }

    pub(crate) fn context_mut(&mut self) -> &mut PluginContext {
        &mut self.ctx
    }

    /// 按 ID 解析（从内容源读取条目）
    pub fn resolve_id(&self, id: ItemId) -> Option<String> {
        match self.ctx.content.get_item(id) {
            Some(item) => self.resolve(&item),
            None => {
                debug!("Content item {} not found, no shortlink", id);
                None
            }
        }
    }

    /// 获取或创建条目的短链
    pub fn resolve(&self, item: &ContentItem) -> Option<String> {
        let item = self.canonical_item(item)?;

        let permalink = match self.check_eligible(&item) {
            Ok(permalink) => permalink,
            Err(e) => {
                debug!("Shortlink suppressed for item {}: {}", item.id, e.message());
                return None;
            }
        };

        if let Some(cached) = self.ctx.store.get(item.id) {
            if self.cached_link_matches(&cached, permalink) {
                debug!("Cached shortlink for item {} verified", item.id);
                return Some(cached);
            }

            debug!("Cached shortlink {} for item {} is stale", cached, item.id);
            if self.ctx.config.shortlinks.delete_stale {
                self.ctx.store.delete(item.id);
            }
        }

        self.shorten(item.id, permalink)
    }

    /// 已缓存的短链（不校验、不请求网络）
    pub fn cached(&self, id: ItemId) -> Option<String> {
        self.ctx.store.get(id)
    }

    /// 获取短链点击统计
    ///
    /// `link-clicks` 与 `referring-domains` 相互独立，任一成功即返回；
    /// 不缓存，每次调用都会请求服务商
    pub fn fetch_click_stats(&self, shortlink: &str) -> Option<ClickStats> {
        if !self.ctx.credentials.is_authorized() {
            debug!("Not authorized, skipping click statistics");
            return None;
        }

        let link_clicks = self
            .call(Operation::LinkClicks, Some(shortlink))
            .and_then(|json| json["data"]["link_clicks"].as_u64());

        let referring_domains = self
            .call(Operation::ReferringDomains, Some(shortlink))
            .and_then(|json| {
                serde_json::from_value::<Vec<ReferringDomain>>(
                    json["data"]["referring_domains"].clone(),
                )
                .map_err(|e| warn!("Malformed referring_domains payload: {}", e))
                .ok()
            });

        let stats = ClickStats {
            link_clicks,
            referring_domains,
        };
        (!stats.is_empty()).then_some(stats)
    }

    // 修订版本 / 自动保存一律回溯到父条目
    fn canonical_item(&self, item: &ContentItem) -> Option<ContentItem> {
        if !item.status.is_snapshot() {
            return Some(item.clone());
        }

        let Some(parent) = item.parent else {
            debug!("Snapshot {} has no parent, no shortlink", item.id);
            return None;
        };
        debug!("Snapshot {} redirected to parent {}", item.id, parent);

        let resolved = self.ctx.content.get_item(parent);
        if resolved.is_none() {
            debug!("Parent {} of snapshot {} not found", parent, item.id);
        }
        resolved
    }

    fn check_eligible<'i>(&self, item: &'i ContentItem) -> Result<&'i str> {
        if !self.ctx.credentials.is_authorized() {
            return Err(PostlinkerError::not_authorized("provider credentials not authorized"));
        }
        if !self.allowed_types.contains(&item.kind) {
            return Err(PostlinkerError::not_eligible(format!(
                "type '{}' is not enabled",
                item.kind
            )));
        }
        if item.status.is_snapshot() || !self.is_eligible_status(item.status) {
            return Err(PostlinkerError::not_eligible(format!(
                "status '{}' is not eligible",
                item.status
            )));
        }
        item.permalink
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| PostlinkerError::not_eligible("item has no permalink yet"))
    }

    fn is_eligible_status(&self, status: ContentStatus) -> bool {
        self.ctx.config.shortlinks.eligible_statuses.contains(&status)
    }

    fn cached_link_matches(&self, shortlink: &str, permalink: &str) -> bool {
        self.call(Operation::Expand, Some(shortlink))
            .is_some_and(|json| json["data"]["expand"][0]["long_url"].as_str() == Some(permalink))
    }

    fn shorten(&self, id: ItemId, permalink: &str) -> Option<String> {
        let json = self.call(Operation::Shorten, Some(permalink))?;

        match json["data"]["url"].as_str().filter(|url| !url.is_empty()) {
            Some(shortlink) => {
                info!("Generated shortlink {} for item {}", shortlink, id);
                self.ctx.store.set(id, shortlink.to_string());
                Some(shortlink.to_string())
            }
            None => {
                warn!("Shorten response for item {} has no data.url", id);
                None
            }
        }
    }

    /// 调用服务商并通过校验，返回解码后的 JSON
    fn call(&self, operation: Operation, subject: Option<&str>) -> Option<Value> {
        let credentials = self.ctx.credentials.token()?;
        let endpoints = Endpoints::new(&self.ctx.config.api.base_url, credentials);

        let url = match endpoints.url(operation, credentials, subject) {
            Ok(url) => url,
            Err(e) => {
                error!("Failed to build {} request: {}", operation, e.format_simple());
                return None;
            }
        };

        let response = self.ctx.client.fetch(&url);
        match validator::validate(&response, operation.validation_mode()) {
            Some(json) => Some(json.clone()),
            None => {
                if let ApiResponse::Json(json) = &response {
                    warn!(
                        "Provider rejected {}: status_code={}, status_txt={}",
                        operation, json["status_code"], json["status_txt"]
                    );
                }
                None
            }
        }
    }
}
