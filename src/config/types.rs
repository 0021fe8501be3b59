//! Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::ports::TransferOptions;
use crate::domain::value_objects::{ChangeFilter, DEFAULT_CHANGES};
use crate::error::SsyncResult;

use super::loader::{self, ConfigWarning};

/// Default quiescence window before a re-sync fires
pub const DEFAULT_DEBOUNCE_MS: u64 = 2000;

/// Transfer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_true")]
    pub compress: bool,

    #[serde(default = "default_true")]
    pub verbose: bool,

    #[serde(default = "default_true")]
    pub progress: bool,

    /// Mirror mode: delete destination entries missing from the source
    #[serde(default)]
    pub delete: bool,

    /// Transfer binary, `rsync` from `PATH` when unset
    #[serde(default)]
    pub rsync: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            compress: true,
            verbose: true,
            progress: true,
            delete: false,
            rsync: None,
        }
    }
}

/// Continuous mode configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Comma-separated change kinds that trigger a re-sync
    #[serde(default = "default_changes")]
    pub changes: String,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            changes: default_changes(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Config {
    /// Load from the user config file (if any) and apply `SSYNC_*` overrides
    pub fn load_or_default() -> SsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default()
    }

    pub fn transfer_options(&self) -> TransferOptions {
        TransferOptions {
            compress: self.sync.compress,
            verbose: self.sync.verbose,
            progress: self.sync.progress,
            delete: self.sync.delete,
        }
    }

    /// Parsed change allow-list plus any names that were not recognised
    pub fn change_filter(&self) -> (ChangeFilter, Vec<String>) {
        ChangeFilter::parse(&self.watch.changes)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.watch.debounce_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_changes() -> String {
    DEFAULT_CHANGES.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}
