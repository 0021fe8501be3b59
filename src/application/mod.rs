//! Application Layer
//!
//! Use cases built on the domain and infrastructure layers:
//! - `SyncSession` - one-time setup and single sync runs
//! - `watch` - continuous, debounced re-sync

mod session;
pub mod watch;

pub use session::SyncSession;
pub use watch::{WatchEvent, WatchOptions, WatchUseCase};
