use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

/// Fixed filename of the single persisted record inside the data directory.
pub const SNAPSHOT_FILENAME: &str = "stored_data.json";

/// The last observed state of the watched element. At most one snapshot
/// exists on disk; it is replaced whole on every captured change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// ISO-8601 instant the snapshot was captured.
    pub timestamp: String,
    /// Exact extracted text at capture time, untruncated. Kept for audit
    /// display only; comparisons go through `hash`.
    pub content: String,
    /// Hex fingerprint of `content`. Written together with `content`, never
    /// separately, so the two cannot diverge.
    pub hash: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read snapshot from {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("corrupt snapshot record at {path:?}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(serde_json::Error),
    #[error("failed to write snapshot: {0}")]
    Write(#[from] PersistError),
}

/// Persists the single snapshot record as pretty JSON under the data
/// directory. A missing record is the normal "no prior observation" state,
/// not an error.
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILENAME)
    }

    /// Loads the stored snapshot, or `None` if nothing was recorded yet.
    /// Unreadable or corrupt records are surfaced as errors so the cycle can
    /// refuse to overwrite state it could not inspect.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let path = self.path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Read { path, source: err }),
        };

        let snapshot =
            serde_json::from_str(&text).map_err(|err| StoreError::Corrupt { path, source: err })?;
        Ok(Some(snapshot))
    }

    /// Overwrites the record with `content` and its fingerprint, stamped with
    /// the current instant. The write goes through a temp file and rename.
    pub fn save(&self, content: &str, hash: &str) -> Result<Snapshot, StoreError> {
        let snapshot = Snapshot {
            timestamp: Local::now().to_rfc3339(),
            content: content.to_string(),
            hash: hash.to_string(),
        };

        let text = serde_json::to_string_pretty(&snapshot).map_err(StoreError::Serialize)?;
        let writer = AtomicFileWriter::new(self.data_dir.clone());
        writer.write(SNAPSHOT_FILENAME, &text)?;
        Ok(snapshot)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
