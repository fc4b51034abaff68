use std::path::Path;

use bytes::Bytes;
use streamtree_shared::{Snapshot, SnapshotError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotFileError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Invalid(#[from] SnapshotError),
}

/// Counts reported in the startup log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub languages: usize,
    pub records: usize,
}

impl SnapshotSummary {
    pub fn of(snapshot: &Snapshot) -> Self {
        Self {
            languages: snapshot.languages().count(),
            records: snapshot.record_count(),
        }
    }
}

/// Raw file contents; the client does its own decoding.
pub async fn read_raw(path: &Path) -> Result<Bytes, SnapshotFileError> {
    Ok(Bytes::from(tokio::fs::read(path).await?))
}

pub async fn load(path: &Path) -> Result<Snapshot, SnapshotFileError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(Snapshot::from_json(&raw)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// Write `contents` to a fresh file under the system temp dir.
    pub fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("streamtree-server-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write temp file");
        path
    }
}
