//! ssync - keep a remote copy of a directory in step with rsync
//!
//! One endpoint is local, the other is a host whose path mirrors the local
//! directory's location under `$HOME`. The local source is synced once and
//! then watched; each burst of qualifying changes triggers another transfer.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{SyncSession, WatchEvent, WatchOptions, WatchUseCase};
pub use config::Config;
pub use domain::ports::{SyncInvocation, TransferError, TransferOptions, TransferRunner};
pub use domain::value_objects::{ChangeFilter, ChangeKind, Endpoint, EndpointPair, Exclusions};
pub use error::{SsyncError, SsyncResult};
pub use infrastructure::RsyncTransfer;
