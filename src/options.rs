use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line surface. Feature flags come in on/off pairs plus
/// `--only-*` variants that disable everything else; resolution lives in
/// [`crate::features::FeatureSet`].
#[derive(Parser, Debug, Default)]
#[command(
    name = "chatpilot",
    version,
    about = "Supervises Claude desktop chats through the accessibility tree",
    long_about = "Polls each chat window's accessibility tree and automates tool \
                  approvals, truncated-reply continuation and completion notifications."
)]
pub struct Options {
    /// Automatically approve tool usage requests (in default set)
    #[arg(long, overrides_with = "no_auto_approve")]
    pub auto_approve: bool,
    #[arg(long, hide_short_help = true)]
    pub no_auto_approve: bool,

    /// Only enable auto-approve and disable all other default features
    #[arg(long)]
    pub only_auto_approve: bool,

    /// Automatically continue chats that hit the reply size limit (in default set)
    #[arg(long, overrides_with = "no_auto_continue")]
    pub auto_continue: bool,
    #[arg(long, hide_short_help = true)]
    pub no_auto_continue: bool,

    /// Only enable auto-continue and disable all other default features
    #[arg(long)]
    pub only_auto_continue: bool,

    /// Send a notification when a response finishes (in default set)
    #[arg(long, overrides_with = "no_notify_on_complete")]
    pub notify_on_complete: bool,
    #[arg(long, hide_short_help = true)]
    pub no_notify_on_complete: bool,

    /// Only enable notify-on-complete and disable all other default features
    #[arg(long)]
    pub only_notify_on_complete: bool,

    /// Capture chat transcripts into this directory (snapshots/ + index)
    #[arg(long, value_name = "DIR")]
    pub snapshot_history: Option<PathBuf>,

    /// Only enable snapshot-history into DIR and disable all other default features
    #[arg(long, value_name = "DIR")]
    pub only_snapshot_history: Option<PathBuf>,

    /// Don't make any changes, just log what would happen
    #[arg(long)]
    pub dry_run: bool,

    /// Run one iteration and exit instead of polling continuously
    #[arg(long)]
    pub once: bool,

    /// Treat unspecified feature flags as disabled
    #[arg(long = "no-default-features")]
    pub no_default_features: bool,

    /// Drive the loop from a recorded accessibility tree instead of a
    /// live application
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Delay between polling iterations
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub tick_ms: u64,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// `--flag` / `--no-flag` pair into an explicit tristate.
pub fn tristate(yes: bool, no: bool) -> Option<bool> {
    if yes {
        Some(true)
    } else if no {
        Some(false)
    } else {
        None
    }
}
