use std::time::{Duration, Instant};

use anchor_locator::{find_tool_approval_dialog, markers};
use ax_adapter::names::role;
use ax_adapter::AxNode;
use tracing::{debug, info, warn};

use crate::outcome::FlowOutcome;

/// Presses the approval button in a pending tool-permission dialog.
///
/// The dialog's removal after a press is not guaranteed to be immediate,
/// so a cool-down suppresses re-firing while the same dialog is still on
/// screen. The empirical default is configurable, not load-bearing.
pub struct ApproveFlow {
    cooldown: Duration,
    last_press: Option<Instant>,
}

impl Default for ApproveFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ApproveFlow {
    pub fn new() -> Self {
        Self::with_cooldown(Duration::from_millis(1000))
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_press: None,
        }
    }

    /// `now` is injected so the cool-down is testable without waiting.
    pub fn run(&mut self, web_content_root: &AxNode, dry_run: bool, now: Instant) -> FlowOutcome {
        let Some(dialog) = find_tool_approval_dialog(web_content_root) else {
            debug!("no approval dialog this poll");
            return FlowOutcome::Skipped("no dialog");
        };

        let buttons = dialog.find_all(&|node| {
            node.role() == role::BUTTON && node.title() == markers::APPROVE_BUTTON_TITLE
        });
        let Some(button) = buttons.first() else {
            warn!(dialog = ?dialog, "approval dialog without its button");
            return FlowOutcome::Skipped("button missing");
        };

        if let Some(last) = self.last_press {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.cooldown {
                debug!(?elapsed, "within approval cool-down, skipping press");
                return FlowOutcome::Skipped("cool-down");
            }
        }

        info!(title = %dialog.title(), "found approval button");
        if dry_run {
            info!("dry-run: leaving the dialog untouched");
            return FlowOutcome::DryRun;
        }

        match button.press() {
            Ok(()) => {
                self.last_press = Some(now);
                info!("pressed approval button");
                FlowOutcome::Fired
            }
            Err(err) => {
                // Cool-down is not advanced: the press did not happen.
                warn!(%err, "approval press rejected");
                FlowOutcome::Skipped("action rejected")
            }
        }
    }
}
