use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the session store and directory index.
///
/// Only `NotFound` is an expected outcome a caller should branch on; the
/// rest indicate an environment or data-integrity problem and are not
/// retried.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("session directory {} is unavailable: {source}", .path.display())]
    StorageUnavailable { path: PathBuf, source: io::Error },

    #[error("invalid session file name \"{name}\"")]
    InvalidFilename { name: String },

    #[error("failed to read session file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write session file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to delete session file {}: {source}", .path.display())]
    Delete { path: PathBuf, source: io::Error },

    #[error("session file {} holds invalid data: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("session with id {0} not found")]
    NotFound(String),
}

/// Business-rule failures from the session lifecycle.
///
/// `AlreadyStarted` and `NotStarted` are recoverable conditions meant for
/// the end user, not internal faults.
#[derive(Debug, Error)]
pub(crate) enum TrackerError {
    #[error("a session for project \"{project}\" is already running")]
    AlreadyStarted { project: String },

    #[error("no session is currently running")]
    NotStarted,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Top-level CLI failures.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD, YYYY-MM-DD or RFC 3339)")]
    InvalidDate { input: String },

    #[error("{0}")]
    Tracker(#[from] TrackerError),

    #[error("{0}")]
    Store(#[from] StoreError),
}
