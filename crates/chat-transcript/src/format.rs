use chatpilot_core_types::{MessageRecord, Role};

/// Separator between messages in the rendered transcript.
const MESSAGE_RULE: &str = "\n\n----\n\n";

/// Render records to the snapshot format: `Role: ` label, blank line,
/// body; messages separated by a horizontal rule.
pub fn format_transcript(records: &[MessageRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{}: \n\n{}", record.role, record.body()))
        .collect::<Vec<_>>()
        .join(MESSAGE_RULE)
}

/// (message count, length of the last assistant message's body) for the
/// status display.
pub fn message_stats(records: &[MessageRecord]) -> (usize, usize) {
    let last_assistant_len = records
        .iter()
        .rev()
        .find(|record| record.role == Role::Assistant)
        .map(|record| record.body().len())
        .unwrap_or(0);
    (records.len(), last_assistant_len)
}
