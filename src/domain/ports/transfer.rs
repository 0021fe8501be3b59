//! Transfer Port
//!
//! The bulk copy is delegated to an external tool. This port describes one
//! invocation of it; infrastructure provides the rsync-backed implementation.

use thiserror::Error;

/// Session-wide switches for every transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOptions {
    pub compress: bool,
    pub verbose: bool,
    pub progress: bool,
    /// Remove destination entries that are absent from the source
    pub delete: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            compress: true,
            verbose: true,
            progress: true,
            delete: false,
        }
    }
}

/// Everything needed for one transfer invocation.
///
/// Built fresh for every run from the immutable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncInvocation {
    /// Source address; its contents (not the directory itself) are copied
    pub source: String,
    pub destination: String,
    pub exclusions: Vec<String>,
    pub options: TransferOptions,
}

/// Failure of a single transfer. Never fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The tool could not be started at all
    #[error("{program} could not be started: {message}")]
    Spawn { program: String, message: String },

    /// The tool ran and exited unsuccessfully
    #[error("{program} command failed: {status}")]
    Failed { program: String, status: String },
}

/// Runs one synchronous transfer.
pub trait TransferRunner: Send + Sync {
    /// Name of the tool (for logging)
    fn name(&self) -> &str;

    /// Run the transfer to completion. Output is streamed to the console.
    fn run(&self, invocation: &SyncInvocation) -> Result<(), TransferError>;
}
