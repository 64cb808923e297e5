//! Shared fixtures: a scripted provider transport and plugin builders.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;

use postlinker::api::{HttpClient, RawResponse, Transport};
use postlinker::config::{AppConfig, AuthConfig};
use postlinker::errors::{PostlinkerError, Result};
use postlinker::models::{ContentItem, ContentStatus, Credentials};
use postlinker::runtime::PluginContext;
use postlinker::services::ShortlinkResolver;
use postlinker::storage::{MemoryContentSource, MemoryMetaStore};

pub const SHORTEN: &str = "/v3/shorten";
pub const EXPAND: &str = "/v3/expand";
pub const USER_INFO: &str = "/v3/user/info";
pub const VALIDATE: &str = "/v3/validate";
pub const LINK_CLICKS: &str = "/v3/link/clicks";
pub const REFERRING_DOMAINS: &str = "/v3/link/referring_domains";

#[derive(Default)]
struct MockState {
    routes: HashMap<&'static str, Result<RawResponse>>,
    calls: Vec<String>,
}

/// Provider double: answers by API path and records every requested URL
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &'static str, body: Value) {
        self.state.lock().routes.insert(
            path,
            Ok(RawResponse {
                status: 200,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, path: &'static str, err: PostlinkerError) {
        self.state.lock().routes.insert(path, Err(err));
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        let prefix = format!("{}?", path);
        self.state
            .lock()
            .calls
            .iter()
            .filter(|url| url.contains(&prefix))
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.state.lock().calls.len()
    }

    pub fn client(&self) -> HttpClient {
        HttpClient::with_transport(Box::new(self.clone()), Duration::from_secs(5))
    }
}

impl Transport for MockProvider {
    fn get(&self, url: &str, _timeout: Duration) -> Result<RawResponse> {
        let mut state = self.state.lock();
        state.calls.push(url.to_string());
        state
            .routes
            .iter()
            .find(|(path, _)| url.contains(&format!("{}?", path)))
            .map(|(_, resp)| resp.clone())
            .unwrap_or_else(|| Err(PostlinkerError::transport_failure("no route")))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub fn shorten_ok(url: &str) -> Value {
    serde_json::json!({
        "status_code": 200,
        "status_txt": "OK",
        "data": { "url": url, "hash": "ab12", "long_url": "ignored", "new_hash": 1 }
    })
}

pub fn expand_ok(long_url: &str) -> Value {
    serde_json::json!({
        "status_code": 200,
        "status_txt": "OK",
        "data": { "expand": [ { "short_url": "https://ex.it/ab12", "long_url": long_url } ] }
    })
}

pub fn provider_error(code: u64, txt: &str) -> Value {
    serde_json::json!({ "status_code": code, "status_txt": txt, "data": null })
}

pub fn authorized_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth = AuthConfig {
        authorized: true,
        credentials: Some(Credentials::oauth("TOKEN", "me")),
    };
    config
}

pub fn published_post(id: u64) -> ContentItem {
    ContentItem::new(id, "post", ContentStatus::Published)
        .with_permalink(format!("https://example.com/post-{}", id))
}

pub struct Fixture {
    pub provider: MockProvider,
    pub store: Arc<MemoryMetaStore>,
    pub content: Arc<MemoryContentSource>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            provider: MockProvider::new(),
            store: Arc::new(MemoryMetaStore::new("_shortlink")),
            content: Arc::new(MemoryContentSource::new()),
        }
    }

    pub fn with_items(items: impl IntoIterator<Item = ContentItem>) -> Self {
        let fixture = Self::new();
        for item in items {
            fixture.content.insert(item);
        }
        fixture
    }

    pub fn context(&self, config: AppConfig) -> PluginContext {
        PluginContext::with_client(
            config,
            self.store.clone(),
            self.content.clone(),
            self.provider.client(),
        )
    }

    pub fn resolver(&self, config: AppConfig) -> ShortlinkResolver {
        ShortlinkResolver::new(self.context(config))
    }
}
