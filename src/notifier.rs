use std::process::Command;

use auto_flows::{Notifier, NotifyError};

/// Desktop notifications through `osascript`, matching the host
/// platform's notification center.
pub struct OsaScriptNotifier;

impl Notifier for OsaScriptNotifier {
    fn notify(&self, title: &str, body: &str, sound: &str) -> Result<(), NotifyError> {
        let script = format!(
            r#"display notification "{}" with title "{}" sound name "{}""#,
            escape(body),
            escape(title),
            escape(sound)
        );
        let status = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .status()
            .map_err(|err| NotifyError(err.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(NotifyError(format!("osascript exited with {status}")))
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape(r#"say "hi"\now"#), r#"say \"hi\"\\now"#);
    }
}
