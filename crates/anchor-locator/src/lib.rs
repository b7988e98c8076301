//! Locates the semantically meaningful anchor nodes (content root,
//! conversation container, footer, dialog, input, buttons) inside a tree
//! whose exact nesting drifts across host-application releases.
//!
//! Every finder is an ordered list of shape alternatives; the first whose
//! structural predicate matches wins, and a full miss is an `Option::None`
//! plus a debug dump of the shape that was actually seen, never an error.

pub mod chat_url;
pub mod composer;
pub mod content;
pub mod dialog;
pub mod markers;
pub mod shape;
pub mod window;

pub use chat_url::chat_url;
pub use composer::{find_send_button, find_stop_button, find_text_input};
pub use content::{find_conversation_anchor, find_sticky_footer};
pub use dialog::find_tool_approval_dialog;
pub use window::find_web_content_root;
