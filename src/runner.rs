use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use auto_flows::{Notifier, WindowAutomation};
use ax_adapter::{AxNode, AxTreeAccess};
use snapshot_store::SnapshotStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::features::FeatureSet;
use crate::status::StatusView;

pub struct RunConfig {
    pub dry_run: bool,
    pub once: bool,
    pub tick: Duration,
}

/// The cooperative poll loop: windows are enumerated once, then each
/// tick polls them sequentially in a fixed order. Nothing in here is
/// fatal: a failed window is logged and the next one still runs.
pub async fn run(
    port: Arc<dyn AxTreeAccess>,
    features: FeatureSet,
    cfg: RunConfig,
    notifier: Arc<dyn Notifier + Send + Sync>,
) -> Result<()> {
    let window_ids = port.windows();
    info!(windows = window_ids.len(), "discovered application windows");

    let store = features
        .snapshot_history
        .as_deref()
        .map(SnapshotStore::new)
        .transpose()
        .context("opening snapshot store")?;

    let toggles = features.toggles();
    let mut automations: Vec<WindowAutomation> = window_ids
        .iter()
        .map(|_| WindowAutomation::new())
        .collect();
    let mut view = StatusView::new(window_ids.len());
    let mut out = stdout();

    let mut pause_events = spawn_pause_listener();
    let mut paused = false;

    loop {
        while pause_events.try_recv().is_ok() {
            paused = !paused;
            info!(paused, "pause toggled");
            view.set_paused(paused);
        }
        if paused {
            view.render(&mut out)?;
            tokio::time::sleep(Duration::from_millis(100)).await;
            continue;
        }

        debug!("start iteration");
        for (index, id) in window_ids.iter().enumerate() {
            let started = Instant::now();
            let window = AxNode::new(port.clone(), *id);
            let report = automations[index].poll(
                &window,
                &toggles,
                notifier.as_ref(),
                cfg.dry_run,
                Instant::now(),
            );

            if let (Some(store), Some(chat), Some(text)) =
                (&store, &report.chat_url, &report.transcript)
            {
                if cfg.dry_run {
                    debug!(chat = %chat, "dry-run: skipping snapshot write");
                } else if let Err(err) = store.update_snapshot(chat.chat_id(), text) {
                    warn!(%err, chat = %chat, "snapshot write failed");
                }
            }

            view.update(index, &report);
            debug!(
                window = index,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "window polled"
            );
        }
        view.render(&mut out)?;

        if cfg.once {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(cfg.tick) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted, stopping after this tick");
                return Ok(());
            }
        }
    }
}

/// Enter on stdin toggles pause. The reader task lives for the process;
/// the loop drains events between ticks.
fn spawn_pause_listener() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}
