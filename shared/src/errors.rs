use thiserror::Error;

/// Failure fetching or decoding the snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("fetch error: {0}")]
    Fetch(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

/// A rank range that does not describe a usable window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("rank range {0:?} is not of the form start-end")]
    Malformed(String),
    #[error("rank range {0:?} must use positive ranks")]
    NotPositive(String),
    #[error("rank range {0:?} ends before it starts")]
    Reversed(String),
}
