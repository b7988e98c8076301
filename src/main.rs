use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use auto_flows::Notifier;
use ax_adapter::{AxTreeAccess, RecordedTree};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatpilot_cli::features::FeatureSet;
use chatpilot_cli::notifier::OsaScriptNotifier;
use chatpilot_cli::options::Options;
use chatpilot_cli::runner::{run, RunConfig};

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Options::parse();
    init_tracing(opts.verbose);

    let features = FeatureSet::resolve(&opts);
    info!("active features: {}", features.describe());

    // The tree-access service is a pluggable port; this build ships the
    // recorded-tree backend. A host adapter implements `AxTreeAccess`
    // and slots in here.
    let replay = opts.replay.clone().context(
        "no live accessibility backend is linked into this build; \
         pass --replay <tree.json> to drive the loop from a recording",
    )?;
    let port: Arc<dyn AxTreeAccess> =
        Arc::new(RecordedTree::load(&replay).context("loading recorded tree")?);
    let notifier: Arc<dyn Notifier + Send + Sync> = Arc::new(OsaScriptNotifier);

    run(
        port,
        features,
        RunConfig {
            dry_run: opts.dry_run,
            once: opts.once,
            tick: Duration::from_millis(opts.tick_ms),
        },
        notifier,
    )
    .await
}
