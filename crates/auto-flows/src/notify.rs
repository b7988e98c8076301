use anchor_locator::{find_sticky_footer, find_stop_button};
use ax_adapter::AxNode;
use tracing::{info, warn};

use crate::notifier::{Notifier, NOTIFY_BODY, NOTIFY_SOUND, NOTIFY_TITLE};
use crate::outcome::FlowOutcome;
use crate::state::WindowState;

/// Edge-triggered completion notification. "Running" is defined purely
/// as "a stop button is currently present in the footer"; only the
/// running→idle transition notifies, exactly once per edge.
#[derive(Default)]
pub struct NotifyFlow;

impl NotifyFlow {
    pub fn run(
        &self,
        conversation_anchor: &AxNode,
        state: &mut WindowState,
        notifier: &dyn Notifier,
        dry_run: bool,
    ) -> FlowOutcome {
        let is_running = find_sticky_footer(conversation_anchor)
            .and_then(|footer| find_stop_button(&footer))
            .is_some();

        match (state.running, is_running) {
            (false, true) => {
                state.running = true;
                info!("detected chat response started");
                FlowOutcome::Skipped("response started")
            }
            (true, false) => {
                state.running = false;
                info!("detected chat response finished");
                if dry_run {
                    info!("dry-run: suppressing notification");
                    return FlowOutcome::DryRun;
                }
                match notifier.notify(NOTIFY_TITLE, NOTIFY_BODY, NOTIFY_SOUND) {
                    Ok(()) => FlowOutcome::Fired,
                    Err(err) => {
                        warn!(%err, "completion notification failed");
                        FlowOutcome::Skipped("notify failed")
                    }
                }
            }
            (true, true) => FlowOutcome::Skipped("still running"),
            (false, false) => FlowOutcome::Skipped("idle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::NotifyError;
    use ax_adapter::RecordedTree;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingNotifier {
        sent: Mutex<Vec<String>>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, _title: &str, body: &str, _sound: &str) -> Result<(), NotifyError> {
            self.sent.lock().push(body.to_string());
            Ok(())
        }
    }

    fn anchor(running: bool) -> Arc<RecordedTree> {
        let buttons = if running {
            json!([{ "role": "AXButton", "description": "Stop response" }])
        } else {
            json!([{ "role": "AXButton", "description": "Send message" }])
        };
        Arc::new(
            RecordedTree::from_value(json!({
                "windows": [{
                    "role": "AXGroup",
                    "children": [{
                        "role": "AXGroup", "classes": ["sticky", "bottom-0"],
                        "children": [{
                            "role": "AXGroup",
                            "children": [{ "role": "AXGroup", "children": buttons }]
                        }]
                    }]
                }]
            }))
            .unwrap(),
        )
    }

    #[test]
    fn notifies_once_per_running_to_idle_edge() {
        let flow = NotifyFlow;
        let notifier = CountingNotifier::default();
        let mut state = WindowState::default();

        // False, True, True, False, False
        let sequence = [false, true, true, false, false];
        let mut outcomes = Vec::new();
        for running in sequence {
            let tree = anchor(running);
            let node = tree.window_node(0).unwrap();
            outcomes.push(flow.run(&node, &mut state, &notifier, false));
        }

        assert_eq!(notifier.sent.lock().len(), 1);
        assert_eq!(outcomes[1], FlowOutcome::Skipped("response started"));
        assert_eq!(outcomes[2], FlowOutcome::Skipped("still running"));
        assert_eq!(outcomes[3], FlowOutcome::Fired);
        assert_eq!(outcomes[4], FlowOutcome::Skipped("idle"));
    }

    #[test]
    fn constant_idle_never_notifies() {
        let flow = NotifyFlow;
        let notifier = CountingNotifier::default();
        let mut state = WindowState::default();

        for _ in 0..3 {
            let tree = anchor(false);
            let node = tree.window_node(0).unwrap();
            assert_eq!(
                flow.run(&node, &mut state, &notifier, false),
                FlowOutcome::Skipped("idle")
            );
        }
        assert!(notifier.sent.lock().is_empty());
    }

    #[test]
    fn dry_run_transitions_state_but_suppresses_the_notification() {
        let flow = NotifyFlow;
        let notifier = CountingNotifier::default();
        let mut state = WindowState::default();

        let tree = anchor(true);
        let node = tree.window_node(0).unwrap();
        flow.run(&node, &mut state, &notifier, true);
        assert!(state.running);

        let tree = anchor(false);
        let node = tree.window_node(0).unwrap();
        assert_eq!(
            flow.run(&node, &mut state, &notifier, true),
            FlowOutcome::DryRun
        );
        assert!(!state.running);
        assert!(notifier.sent.lock().is_empty());
    }
}
