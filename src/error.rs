//! Error types for repowatch
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repowatch operations
pub type WatchResult<T> = Result<T, WatchError>;

/// Main error type for repowatch operations
#[derive(Error, Debug)]
pub enum WatchError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The raw event source refused to watch a path
    #[error("failed to watch {path}: {message}")]
    Subscribe { path: PathBuf, message: String },

    /// No metadata directory could be found for a working copy
    #[error("not a git repository: {path}")]
    NotARepository { path: PathBuf },

    /// A `.git` indirection file did not contain a usable `gitdir:` line
    #[error("invalid gitdir file {file}: {message}")]
    InvalidGitdir { file: PathBuf, message: String },

    /// Watched paths must be absolute
    #[error("watched path must be absolute: {path}")]
    RelativePath { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Reference file content could not be decoded
    #[error("malformed reference {path}: {reason}")]
    MalformedRef { path: PathBuf, reason: String },

    /// The dispatch worker thread could not be started
    #[error("failed to spawn dispatch worker: {0}")]
    WorkerSpawn(String),

    /// `start` was called by a listener whose own watch has been stopped
    #[error("cannot restart a watcher from a listener of its stopped watch")]
    RestartFromListener,
}

impl WatchError {
    /// Build a subscription error from a `notify` failure
    pub(crate) fn subscribe(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        WatchError::Subscribe {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
