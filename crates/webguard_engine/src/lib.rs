//! WebGuard engine: IO adapters and the monitor cycle.
mod decode;
mod extract;
mod fetch;
mod monitor;
mod notify;
mod persist;
mod store;
mod types;

pub use decode::{decode_page, DecodedPage};
pub use extract::select_text;
pub use fetch::{ContentFetcher, FetchSettings, HttpFetcher, WatchTarget};
pub use monitor::{run_cycle, CycleOutcome};
pub use notify::{alert_body, Notifier, SmtpNotifier, SmtpSettings, ALERT_SUBJECT};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use store::{Snapshot, SnapshotStore, StoreError, SNAPSHOT_FILENAME};
pub use types::{FetchError, FetchFailure, NotifyError, NotifyFailure};
