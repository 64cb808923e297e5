use serde::{Deserialize, Serialize};

/// 引荐域名统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferringDomain {
    pub domain: String,
    #[serde(default)]
    pub clicks: u64,
    /// 部分域名（如直接访问）没有 URL
    #[serde(default)]
    pub url: Option<String>,
}

/// 短链点击统计
///
/// 两部分独立获取，任一部分失败时对应字段为 `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickStats {
    pub link_clicks: Option<u64>,
    pub referring_domains: Option<Vec<ReferringDomain>>,
}

impl ClickStats {
    pub fn is_empty(&self) -> bool {
        self.link_clicks.is_none() && self.referring_domains.is_none()
    }

    /// 两部分均已获取
    pub fn is_complete(&self) -> bool {
        self.link_clicks.is_some() && self.referring_domains.is_some()
    }
}
