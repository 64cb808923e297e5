//! 凭据与授权状态
//!
//! 授权只在保存设置时校验一次，结果由调用方持久化；
//! 解析引擎只读取 `is_authorized()`，从不自行重新校验。

use tracing::{debug, info, warn};

use crate::api::{Endpoints, HttpClient, Operation, validator};
use crate::config::AuthConfig;
use crate::models::Credentials;

/// 当前持有的凭据与授权标记
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialState {
    credentials: Option<Credentials>,
    authorized: bool,
}

impl CredentialState {
    /// 没有凭据或凭据为空时，授权标记强制为 false
    pub fn new(credentials: Option<Credentials>, authorized: bool) -> Self {
        let authorized = authorized && credentials.as_ref().is_some_and(|c| !c.is_blank());
        Self {
            credentials,
            authorized,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.credentials.clone(), config.authorized)
    }

    /// 转换为可持久化的配置段
    pub fn to_config(&self) -> AuthConfig {
        AuthConfig {
            authorized: self.authorized,
            credentials: self.credentials.clone(),
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    pub fn token(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// 校验并保存新凭据，返回授权结果
    pub fn authorize(&mut self, credentials: Credentials, validator: &CredentialValidator<'_>) -> bool {
        let authorized = validator.validate(&credentials);
        if authorized {
            info!("Credentials authorized ({} scheme)", credentials.scheme_name());
        } else {
            warn!("Credentials rejected ({} scheme)", credentials.scheme_name());
        }
        self.credentials = Some(credentials);
        self.authorized = authorized;
        authorized
    }

    /// 仅在凭据变化时重新校验
    pub fn set_credentials_if_changed(
        &mut self,
        credentials: Credentials,
        validator: &CredentialValidator<'_>,
    ) -> bool {
        if self.credentials.as_ref() == Some(&credentials) {
            debug!("Credentials unchanged, keeping authorized={}", self.authorized);
            return self.authorized;
        }
        self.authorize(credentials, validator)
    }

    /// 断开服务商账号
    pub fn disconnect(&mut self) {
        info!("Disconnecting shortening provider account");
        self.credentials = None;
        self.authorized = false;
    }
}

/// 保存设置时调用 `user-info` 校验凭据
pub struct CredentialValidator<'a> {
    client: &'a HttpClient,
    base_url: &'a str,
}

impl<'a> CredentialValidator<'a> {
    pub fn new(client: &'a HttpClient, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// 凭据是否被服务商接受
    ///
    /// - OAuth：响应包含 `data.member_since`
    /// - Legacy：`data.valid == 1`
    pub fn validate(&self, credentials: &Credentials) -> bool {
        if credentials.is_blank() {
            debug!("Blank credentials, skipping validation request");
            return false;
        }

        let endpoints = Endpoints::new(self.base_url, credentials);
        let url = match endpoints.url(Operation::UserInfo, credentials, None) {
            Ok(url) => url,
            Err(e) => {
                warn!("Cannot build user-info request: {}", e);
                return false;
            }
        };

        let response = self.client.fetch(&url);
        let Some(json) = validator::validate(&response, Operation::UserInfo.validation_mode())
        else {
            return false;
        };

        let data = &json["data"];
        match credentials {
            Credentials::OAuth { .. } => !data["member_since"].is_null(),
            Credentials::Legacy { .. } => {
                data["valid"].as_u64() == Some(1)
                    || data["valid"].as_bool() == Some(true)
                    || data["valid"].as_str() == Some("1")
            }
        }
    }
}
