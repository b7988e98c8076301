//! Turns the conversation anchor's children into normalized
//! [`MessageRecord`]s and renders them for humans.

pub mod extract;
pub mod format;
pub mod render;

pub use extract::extract_messages;
pub use format::{format_transcript, message_stats};
pub use render::render_paragraph;
