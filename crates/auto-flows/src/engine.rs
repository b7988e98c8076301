use std::time::Instant;

use anchor_locator::{chat_url, find_conversation_anchor, find_web_content_root};
use ax_adapter::AxNode;
use chat_transcript::{extract_messages, format_transcript, message_stats};
use chatpilot_core_types::ChatUrl;
use tracing::debug;

use crate::approve::ApproveFlow;
use crate::auto_continue::ContinueFlow;
use crate::notifier::Notifier;
use crate::notify::NotifyFlow;
use crate::outcome::FlowOutcome;
use crate::state::WindowState;

/// Which behaviors run this poll.
#[derive(Clone, Copy, Debug)]
pub struct FlowToggles {
    pub auto_approve: bool,
    pub auto_continue: bool,
    pub notify_on_complete: bool,
    pub snapshot_history: bool,
}

/// What one window's poll produced, for the status display and sinks.
#[derive(Debug, Default)]
pub struct WindowReport {
    pub chat_url: Option<ChatUrl>,
    pub message_count: usize,
    pub last_assistant_len: usize,
    pub approve: Option<FlowOutcome>,
    pub notify: Option<FlowOutcome>,
    pub continued: Option<FlowOutcome>,
    /// Rendered transcript when snapshotting is on and history is
    /// non-empty; persisting it is the caller's concern.
    pub transcript: Option<String>,
}

/// One window's automation: the three flows plus the state they guard.
/// Anchors are re-derived from the window root on every poll; nothing
/// from the external tree survives between calls.
#[derive(Default)]
pub struct WindowAutomation {
    approve: ApproveFlow,
    continue_flow: ContinueFlow,
    notify: NotifyFlow,
    state: WindowState,
}

impl WindowAutomation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flows with non-default timings, for tests.
    pub fn with_flows(approve: ApproveFlow, continue_flow: ContinueFlow) -> Self {
        Self {
            approve,
            continue_flow,
            notify: NotifyFlow,
            state: WindowState::default(),
        }
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn poll(
        &mut self,
        window: &AxNode,
        toggles: &FlowToggles,
        notifier: &dyn Notifier,
        dry_run: bool,
        now: Instant,
    ) -> WindowReport {
        let mut report = WindowReport::default();

        let Some(web_root) = find_web_content_root(window) else {
            debug!("could not find web content, skipping window");
            return report;
        };
        let Some(chat) = chat_url(&web_root) else {
            debug!("not a live chat, skipping window");
            return report;
        };
        report.chat_url = Some(chat.clone());

        // Extract once; every consumer below reads the same records.
        let anchor = find_conversation_anchor(&web_root);
        let records = match &anchor {
            Some(anchor) => extract_messages(anchor),
            None => {
                debug!("could not find conversation anchor");
                Vec::new()
            }
        };
        let (count, last_len) = message_stats(&records);
        report.message_count = count;
        report.last_assistant_len = last_len;

        if toggles.auto_approve {
            report.approve = Some(self.approve.run(&web_root, dry_run, now));
        }

        if let Some(anchor) = &anchor {
            if toggles.notify_on_complete {
                report.notify =
                    Some(self.notify.run(anchor, &mut self.state, notifier, dry_run));
            }
            if toggles.auto_continue {
                report.continued = Some(self.continue_flow.run(
                    &chat,
                    anchor,
                    &records,
                    &mut self.state,
                    dry_run,
                ));
            }
            if toggles.snapshot_history && !records.is_empty() {
                report.transcript = Some(format_transcript(&records));
            }
        }

        report
    }
}
