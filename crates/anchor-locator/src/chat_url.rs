use ax_adapter::AxNode;
use chatpilot_core_types::ChatUrl;
use tracing::{debug, warn};
use url::Url;

use crate::markers;

/// Read the content root's URL and decide whether this window shows a
/// live chat. Only `https://claude.ai/chat/<hex-and-hyphen id>` counts;
/// anything else (or no URL at all) makes every automation skip the
/// window for this poll.
pub fn chat_url(web_content_root: &AxNode) -> Option<ChatUrl> {
    let raw = match web_content_root.url() {
        Some(raw) => raw,
        None => {
            warn!("content root has no URL attribute");
            return None;
        }
    };
    debug!(url = %raw, "content root URL");
    parse_chat_url(&raw)
}

pub fn parse_chat_url(raw: &str) -> Option<ChatUrl> {
    let parsed = Url::parse(raw).ok()?;
    if parsed.scheme() != "https" || parsed.host_str() != Some(markers::CHAT_URL_HOST) {
        return None;
    }
    let id = parsed.path().strip_prefix(markers::CHAT_URL_PATH_PREFIX)?;
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return None;
    }
    Some(ChatUrl::new(raw, id))
}
