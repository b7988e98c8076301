use std::path::PathBuf;

use auto_flows::FlowToggles;

use crate::options::{tristate, Options};

/// The resolved feature selection for this run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeatureSet {
    pub auto_approve: bool,
    pub auto_continue: bool,
    pub notify_on_complete: bool,
    pub snapshot_history: Option<PathBuf>,
}

impl FeatureSet {
    /// Resolution order: explicit `--feature/--no-feature` beats the
    /// default set; any `--only-*` flag beats everything and enables
    /// just the features it names.
    pub fn resolve(opts: &Options) -> Self {
        let snapshot_history = opts
            .only_snapshot_history
            .clone()
            .or_else(|| opts.snapshot_history.clone());

        let any_only = opts.only_auto_approve
            || opts.only_auto_continue
            || opts.only_notify_on_complete
            || opts.only_snapshot_history.is_some();

        let default_state = !opts.no_default_features;
        let mut auto_approve =
            tristate(opts.auto_approve, opts.no_auto_approve).unwrap_or(default_state);
        let mut auto_continue =
            tristate(opts.auto_continue, opts.no_auto_continue).unwrap_or(default_state);
        let mut notify_on_complete =
            tristate(opts.notify_on_complete, opts.no_notify_on_complete).unwrap_or(default_state);

        if any_only {
            auto_approve = opts.only_auto_approve;
            auto_continue = opts.only_auto_continue;
            notify_on_complete = opts.only_notify_on_complete;
        }

        Self {
            auto_approve,
            auto_continue,
            notify_on_complete,
            snapshot_history,
        }
    }

    pub fn toggles(&self) -> FlowToggles {
        FlowToggles {
            auto_approve: self.auto_approve,
            auto_continue: self.auto_continue,
            notify_on_complete: self.notify_on_complete,
            snapshot_history: self.snapshot_history.is_some(),
        }
    }

    pub fn describe(&self) -> String {
        let mut active = Vec::new();
        if self.auto_approve {
            active.push("auto-approve".to_string());
        }
        if self.auto_continue {
            active.push("auto-continue".to_string());
        }
        if self.notify_on_complete {
            active.push("notify-on-complete".to_string());
        }
        if let Some(dir) = &self.snapshot_history {
            active.push(format!("snapshot-history={}", dir.display()));
        }
        if active.is_empty() {
            "none".to_string()
        } else {
            active.join(", ")
        }
    }
}
