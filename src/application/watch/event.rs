//! Watch event types and options

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use notify::event::{EventKind, ModifyKind};

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::domain::value_objects::{ChangeFilter, ChangeKind};

/// Debounce duration used when nothing else is configured
pub const DEBOUNCE: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

/// Receiver of watch events; called from the intake loop and the timer thread
pub type EventSink = Arc<dyn Fn(WatchEvent) + Send + Sync>;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory tree to watch (the local source)
    pub root: PathBuf,
    /// Change kinds that trigger a re-sync
    pub filter: ChangeFilter,
    /// Quiescence window
    pub debounce: Duration,
}

impl WatchOptions {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            filter: ChangeFilter::default(),
            debounce: DEBOUNCE,
        }
    }

    pub fn with_filter(mut self, filter: ChangeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// A single filesystem change, as delivered by the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Split a notifier event into one change per path.
    ///
    /// Access events and events of unknown kind produce nothing.
    pub fn from_notify(event: notify::Event) -> Vec<Self> {
        let Some(kind) = classify(&event.kind) else {
            return Vec::new();
        };
        event
            .paths
            .into_iter()
            .map(|path| Self { path, kind })
            .collect()
    }
}

/// Map a notifier event kind onto a change kind.
pub fn classify(kind: &EventKind) -> Option<ChangeKind> {
    match kind {
        EventKind::Create(_) => Some(ChangeKind::Create),
        EventKind::Remove(_) => Some(ChangeKind::Remove),
        EventKind::Modify(ModifyKind::Metadata(_)) => Some(ChangeKind::Chmod),
        EventKind::Modify(ModifyKind::Name(_)) => Some(ChangeKind::Rename),
        EventKind::Modify(_) => Some(ChangeKind::Write),
        _ => None,
    }
}

/// Watch event types for console and NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Notifier attached, intake loop running
    WatchStarted { root: String, changes: String },
    /// A qualifying change (re)armed the debounce timer
    FileChanged { path: String, kind: ChangeKind },
    /// A transfer is starting
    SyncStarted,
    /// The transfer exited successfully
    SyncComplete,
    /// The transfer failed; watching continues
    SyncFailed { message: String },
    /// The notifier reported an error; watching continues
    Error { message: String },
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
