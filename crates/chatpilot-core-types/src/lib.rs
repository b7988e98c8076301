use std::fmt;

use serde::{Deserialize, Serialize};

/// Who produced a message in the conversation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
    /// The extractor had no rule for the node shape; the record carries the
    /// node's flattened text so coverage gaps stay visible.
    Unknown,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Assistant => write!(f, "Assistant"),
            Role::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One extracted message, rebuilt fresh from the tree every poll.
/// Never cached across ticks and never mutated after construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub role: Role,
    /// Paragraph blocks in document order.
    pub content: Vec<String>,
    /// The host application cut generation off at its reply size limit.
    pub truncated: bool,
}

impl MessageRecord {
    pub fn new(role: Role, content: Vec<String>) -> Self {
        Self {
            role,
            content,
            truncated: false,
        }
    }

    pub fn truncated(role: Role, content: Vec<String>) -> Self {
        Self {
            role,
            content,
            truncated: true,
        }
    }

    /// Paragraph blocks joined the way the transcript renders them.
    pub fn body(&self) -> String {
        self.content.join("\n\n")
    }
}

/// Identity of a live chat: the full chat URL plus the hex-and-hyphen
/// identifier it carries. A window without one of these is not a chat and
/// every automation skips it for the poll.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ChatUrl {
    full: String,
    id: String,
}

impl ChatUrl {
    pub fn new(full: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            id: id.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The identifier segment, used to key snapshot files.
    pub fn chat_id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ChatUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_matches_transcript_labels() {
        assert_eq!(Role::User.to_string(), "User");
        assert_eq!(Role::Assistant.to_string(), "Assistant");
        assert_eq!(Role::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn record_body_joins_blocks() {
        let record = MessageRecord::new(Role::User, vec!["a".into(), "b".into()]);
        assert_eq!(record.body(), "a\n\nb");
        assert!(!record.truncated);
    }
}
