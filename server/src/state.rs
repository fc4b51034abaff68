use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{snapshot_path, static_dir};

/// Shared, read-only server configuration handed to every route.
#[derive(Debug, Clone)]
pub struct AppState {
    pub snapshot_path: Arc<PathBuf>,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(snapshot_path: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            snapshot_path: Arc::new(snapshot_path),
            static_dir: Arc::new(static_dir),
        }
    }

    pub fn from_env() -> Self {
        Self::new(snapshot_path(), static_dir())
    }
}
