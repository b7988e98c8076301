use thiserror::Error;

pub const NOTIFY_TITLE: &str = "Claude";
pub const NOTIFY_BODY: &str = "Claude response finished";
pub const NOTIFY_SOUND: &str = "Glass";

#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

/// Fire-and-forget completion notification sink.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str, sound: &str) -> Result<(), NotifyError>;
}

/// Swallows notifications; useful when the feature is exercised without
/// a desktop session.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _body: &str, _sound: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}
