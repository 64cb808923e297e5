use crate::models::ClickStats;
use crate::utils::html;

/// 统计获取失败时显示的提示
pub const STATS_ERROR_LINE: &str =
    "There was a problem retrieving information about your link. There may be no statistics yet.";

/// 渲染统计面板
///
/// 点击数与引荐域名都获取成功才显示统计，否则显示一行错误提示
pub fn stats_panel(stats: Option<&ClickStats>) -> String {
    let Some((clicks, domains)) =
        stats.and_then(|s| Some((s.link_clicks?, s.referring_domains.as_ref()?)))
    else {
        return format!("<p class=\"error\">{}</p>", STATS_ERROR_LINE);
    };

    let mut out = format!("<p>Global click through: <strong>{}</strong></p>", clicks);
    if !domains.is_empty() {
        out.push_str("<h4>Your link was shared on</h4>");
        for domain in domains {
            let name = html::escape(&domain.domain);
            match domain.url.as_deref().filter(|u| !u.is_empty()) {
                Some(url) => out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" title=\"{}\">{}</a> ({})<br>",
                    html::escape(url),
                    name,
                    name,
                    domain.clicks
                )),
                None => out.push_str(&format!("<strong>{}</strong> ({})<br>", name, domain.clicks)),
            }
        }
    }
    out
}
