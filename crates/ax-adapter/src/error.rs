use thiserror::Error;

#[derive(Debug, Error)]
pub enum AxError {
    /// A read the caller required came back unset.
    #[error("attribute {0} is not set")]
    AttributeMissing(String),
    #[error("write to {attribute} rejected: {reason}")]
    WriteRejected { attribute: String, reason: String },
    #[error("action {action} rejected: {reason}")]
    ActionRejected { action: String, reason: String },
    /// The tree-access service itself failed, as opposed to answering
    /// with a valid "no value".
    #[error("accessibility host error: {0}")]
    Host(String),
    #[error("recorded tree: {0}")]
    Snapshot(String),
}

impl AxError {
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }
}
