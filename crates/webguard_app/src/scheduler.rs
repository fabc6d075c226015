//! Fixed-interval scheduler: one cycle at a time, forever.

use std::time::Duration;

use guard_logging::guard_info;
use webguard_engine::{run_cycle, ContentFetcher, Notifier, SnapshotStore, WatchTarget};

/// Runs one cycle eagerly, then repeats at `interval` until Ctrl-C.
///
/// Exactly one cycle is in flight at a time; the sleep between cycles is the
/// only suspension point, so an interrupt never leaves a cycle half-executed.
pub async fn run(
    fetcher: &dyn ContentFetcher,
    store: &SnapshotStore,
    notifier: &dyn Notifier,
    target: &WatchTarget,
    interval: Duration,
) -> anyhow::Result<()> {
    run_cycle(fetcher, store, notifier, target).await;

    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {
                run_cycle(fetcher, store, notifier, target).await;
            }
            result = tokio::signal::ctrl_c() => {
                result?;
                guard_info!("Monitor stopped by user.");
                return Ok(());
            }
        }
    }
}
