//! Configuration module for ssync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SSYNC_*)
//! 3. User config (~/.config/ssync/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, SyncConfig, WatchConfig, DEFAULT_DEBOUNCE_MS};
