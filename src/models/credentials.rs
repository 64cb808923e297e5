use serde::{Deserialize, Serialize};

/// 服务商凭据
///
/// 每个部署只启用一种方案，配置时确定，调用时不再按字段是否存在分支。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum Credentials {
    /// 旧版 login + API key 方案
    Legacy { username: String, api_key: String },
    /// OAuth access token 方案
    #[serde(rename = "oauth")]
    OAuth {
        access_token: String,
        #[serde(default)]
        login: String,
    },
}

impl Credentials {
    pub fn oauth(access_token: impl Into<String>, login: impl Into<String>) -> Self {
        Self::OAuth {
            access_token: access_token.into(),
            login: login.into(),
        }
    }

    pub fn legacy(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::Legacy {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// URL 模板中的凭据参数（按模板顺序排列）
    pub fn url_params(&self) -> Vec<&str> {
        match self {
            Self::Legacy { username, api_key } => vec![username, api_key],
            Self::OAuth { access_token, .. } => vec![access_token],
        }
    }

    /// 凭据字段是否为空
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Legacy { username, api_key } => {
                username.trim().is_empty() || api_key.trim().is_empty()
            }
            Self::OAuth { access_token, .. } => access_token.trim().is_empty(),
        }
    }

    pub fn scheme_name(&self) -> &'static str {
        match self {
            Self::Legacy { .. } => "legacy",
            Self::OAuth { .. } => "oauth",
        }
    }
}
