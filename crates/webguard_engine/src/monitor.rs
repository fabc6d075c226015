use guard_logging::{guard_error, guard_info, guard_warn};
use webguard_core::{classify, digest, normalize, Comparison};

use crate::fetch::{ContentFetcher, WatchTarget};
use crate::notify::Notifier;
use crate::store::SnapshotStore;

/// Terminal state of one monitor cycle. Failures are non-fatal; the scheduler
/// runs the next cycle on schedule regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// First observation recorded; no alert sent.
    Bootstrapped,
    /// Fingerprint matched the stored one; nothing written, nothing sent.
    Unchanged,
    /// New state recorded. `notified` is false when the alert failed; the
    /// store mutation stands either way.
    Changed { notified: bool },
    /// The fetch failed; the store was not touched.
    FetchFailed,
    /// The store could not be read or written; the change (if any) was not
    /// durably recorded, so a later cycle may re-detect and re-alert it.
    StoreFailed,
}

/// Runs exactly one fetch -> digest -> compare -> act sequence.
///
/// No state carries over between cycles except through the store.
pub async fn run_cycle(
    fetcher: &dyn ContentFetcher,
    store: &SnapshotStore,
    notifier: &dyn Notifier,
    target: &WatchTarget,
) -> CycleOutcome {
    guard_info!("Checking {} ({})", target.url(), target.selector());

    let raw = match fetcher.fetch(target).await {
        Ok(text) => text,
        Err(err) => {
            guard_error!("Fetch failed: {}", err);
            return CycleOutcome::FetchFailed;
        }
    };

    let new_content = normalize(&raw);
    let new_fingerprint = digest(new_content);

    let stored = match store.load() {
        Ok(stored) => stored,
        Err(err) => {
            // Refuse to overwrite a record that could not be inspected.
            guard_error!("Snapshot load failed: {}", err);
            return CycleOutcome::StoreFailed;
        }
    };

    match classify(stored.as_ref().map(|s| s.hash.as_str()), &new_fingerprint) {
        Comparison::Bootstrap => {
            guard_info!("No previous snapshot found. Saving initial state.");
            match store.save(new_content, &new_fingerprint) {
                Ok(_) => CycleOutcome::Bootstrapped,
                Err(err) => {
                    guard_error!("Snapshot save failed: {}", err);
                    CycleOutcome::StoreFailed
                }
            }
        }
        Comparison::Unchanged => {
            guard_info!("No change detected.");
            CycleOutcome::Unchanged
        }
        Comparison::Changed => {
            guard_info!("Change detected!");
            if let Err(err) = store.save(new_content, &new_fingerprint) {
                // Skip the alert: it would advertise state that was not
                // durably recorded. The next cycle re-detects the change.
                guard_error!("Snapshot save failed: {}", err);
                return CycleOutcome::StoreFailed;
            }
            match notifier.notify(new_content).await {
                Ok(()) => {
                    guard_info!("Email alert sent.");
                    CycleOutcome::Changed { notified: true }
                }
                Err(err) => {
                    guard_warn!("Failed to send email alert: {}", err);
                    CycleOutcome::Changed { notified: false }
                }
            }
        }
    }
}
