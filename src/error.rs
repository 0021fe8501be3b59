//! Error types for ssync
//!
//! Library code returns `SsyncError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::EndpointError;

/// Result type alias for ssync operations
pub type SsyncResult<T> = Result<T, SsyncError>;

/// Main error type for ssync operations
#[derive(Error, Debug)]
pub enum SsyncError {
    /// Source/destination combination is not usable
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// The working directory could not be read
    #[error("unable to get current working directory: {0}")]
    CurrentDirUnavailable(#[source] std::io::Error),

    /// The user's home directory could not be determined
    #[error("unable to get user's home directory")]
    HomeDirUnavailable,

    /// The filesystem notifier could not be created or attached
    #[error("unable to watch {path}: {message}")]
    WatcherSetup { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SsyncError {
    pub(crate) fn watcher_setup(path: impl Into<PathBuf>, err: notify::Error) -> Self {
        Self::WatcherSetup {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
