use std::time::Duration;

use anchor_locator::{find_send_button, find_sticky_footer, find_text_input, markers};
use ax_adapter::AxNode;
use chatpilot_core_types::{ChatUrl, MessageRecord, Role};
use tracing::{debug, info, warn};

use crate::outcome::FlowOutcome;
use crate::state::{ContinueWatermark, WindowState};

/// Prompt written into the composer when a reply was cut off.
pub const CONTINUE_PROMPT: &str = "Continue";

/// Resubmits "Continue" when the last message is a truncated assistant
/// reply, at most once per (chat, message index). The per-window
/// watermark survives the poll loop so the same truncation event is
/// never re-attempted.
pub struct ContinueFlow {
    /// Wait after writing the composer before pressing send, so the
    /// written value propagates through the host's editor. Empirical.
    settle: Duration,
}

impl Default for ContinueFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContinueFlow {
    pub fn new() -> Self {
        Self::with_settle(Duration::from_millis(100))
    }

    pub fn with_settle(settle: Duration) -> Self {
        Self { settle }
    }

    pub fn run(
        &self,
        chat: &ChatUrl,
        conversation_anchor: &AxNode,
        records: &[MessageRecord],
        state: &mut WindowState,
        dry_run: bool,
    ) -> FlowOutcome {
        let Some((index, last)) = records.iter().enumerate().last() else {
            return FlowOutcome::Skipped("no messages");
        };
        if last.role != Role::Assistant || !last.truncated {
            debug!("no trailing truncation, all done");
            return FlowOutcome::Skipped("no trailing truncation");
        }

        match &state.continue_watermark {
            Some(mark) if mark.chat == *chat && index <= mark.index => {
                debug!(index, watermark = mark.index, "already attempted this truncation");
                return FlowOutcome::Skipped("watermark");
            }
            _ => {}
        }
        // Advanced before anything can abort (including in dry-run) so
        // the same event is not re-attempted on the next poll.
        state.continue_watermark = Some(ContinueWatermark {
            chat: chat.clone(),
            index,
        });
        info!(index, chat = %chat, "reply hit the size limit at end of chat");

        let Some(footer) = find_sticky_footer(conversation_anchor) else {
            warn!("can't find sticky footer");
            return FlowOutcome::Skipped("no footer");
        };
        let Some(input) = find_text_input(&footer) else {
            warn!("can't find text input");
            return FlowOutcome::Skipped("no text input");
        };

        let draft = input.text_value();
        if !draft.is_empty() && draft != CONTINUE_PROMPT && draft != markers::COMPOSER_PLACEHOLDER {
            // Never overwrite what the user is composing.
            info!(draft = %draft, "composer holds a draft, aborting");
            return FlowOutcome::Skipped("draft present");
        }

        let Some(send) = find_send_button(&footer) else {
            warn!("no send button, skipping auto-continue");
            return FlowOutcome::Skipped("no send button");
        };

        if dry_run {
            info!("dry-run: would continue");
            return FlowOutcome::DryRun;
        }

        if let Err(err) = input.set_text_value(CONTINUE_PROMPT) {
            warn!(%err, "composer write rejected");
            return FlowOutcome::Skipped("write rejected");
        }
        std::thread::sleep(self.settle);
        if let Err(err) = send.press() {
            warn!(%err, "send press rejected");
            return FlowOutcome::Skipped("action rejected");
        }

        info!("auto-continue triggered");
        FlowOutcome::Fired
    }
}
