//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, error, warn};

use crate::application::SyncSession;
use crate::domain::ports::TransferRunner;
use crate::domain::value_objects::{ChangeFilter, Exclusions};
use crate::error::{SsyncError, SsyncResult};

use super::debounce::DebounceTimer;
use super::event::{ChangeEvent, EventSink, WatchEvent, WatchOptions};

/// Debouncer state as seen from the intake loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// No sync scheduled
    Idle,
    /// A sync fires once the quiescence window elapses
    Pending,
}

/// Run one transfer and report it through `sink`.
///
/// Returns whether the transfer succeeded. A failure is logged, never
/// propagated.
pub fn run_sync(session: &SyncSession, runner: &dyn TransferRunner, sink: &dyn Fn(WatchEvent)) -> bool {
    sink(WatchEvent::SyncStarted);
    match session.sync_once(runner) {
        Ok(()) => {
            sink(WatchEvent::SyncComplete);
            true
        }
        Err(e) => {
            error!(error = %e, "sync failed");
            sink(WatchEvent::SyncFailed {
                message: e.to_string(),
            });
            false
        }
    }
}

/// Event intake: filters changes and (re)arms the debounce timer.
///
/// Owns the timer; nothing else schedules a sync.
pub struct ChangeIntake {
    filter: ChangeFilter,
    exclusions: Exclusions,
    timer: DebounceTimer,
    sink: EventSink,
}

impl ChangeIntake {
    pub fn new(
        filter: ChangeFilter,
        exclusions: Exclusions,
        timer: DebounceTimer,
        sink: EventSink,
    ) -> Self {
        Self {
            filter,
            exclusions,
            timer,
            sink,
        }
    }

    /// Whether the change passes the kind allow-list and the exclusions.
    pub fn qualifies(&self, change: &ChangeEvent) -> bool {
        self.filter.allows(change.kind) && !self.exclusions.is_excluded(&change.path)
    }

    /// Handle one change. Returns `true` if it (re)armed the timer.
    pub fn handle(&self, change: &ChangeEvent) -> bool {
        if !self.qualifies(change) {
            return false;
        }

        let path = self
            .exclusions
            .relative(&change.path)
            .unwrap_or_else(|| change.path.clone());
        (self.sink)(WatchEvent::FileChanged {
            path: path.display().to_string(),
            kind: change.kind,
        });

        self.timer.reset();
        true
    }

    /// Consume notifier results until the sender goes away.
    pub fn run(&self, events: Receiver<notify::Result<Event>>) {
        for result in events {
            match result {
                Ok(event) => {
                    for change in ChangeEvent::from_notify(event) {
                        self.handle(&change);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "error watching files");
                    (self.sink)(WatchEvent::Error {
                        message: e.to_string(),
                    });
                }
            }
        }
        debug!("notifier channel closed");
    }

    pub fn state(&self) -> WatchState {
        if self.timer.is_pending() {
            WatchState::Pending
        } else {
            WatchState::Idle
        }
    }

    pub fn timer(&self) -> &DebounceTimer {
        &self.timer
    }
}

/// Watch Use Case
///
/// Watches the session's local source and re-syncs after each burst of
/// qualifying changes. This is the entry point for continuous mode.
pub struct WatchUseCase {
    session: Arc<SyncSession>,
    runner: Arc<dyn TransferRunner>,
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(
        session: Arc<SyncSession>,
        runner: Arc<dyn TransferRunner>,
        options: WatchOptions,
    ) -> Self {
        Self {
            session,
            runner,
            options,
        }
    }

    /// Build the intake loop with a timer that syncs through this session.
    pub fn intake(&self, root: &Path, sink: EventSink) -> SsyncResult<ChangeIntake> {
        let session = Arc::clone(&self.session);
        let runner = Arc::clone(&self.runner);
        let fire_sink = Arc::clone(&sink);

        let timer = DebounceTimer::spawn(self.options.debounce, move || {
            run_sync(&session, runner.as_ref(), fire_sink.as_ref());
        })?;

        let exclusions = self.session.exclusions().clone().with_root(root);
        Ok(ChangeIntake::new(
            self.options.filter.clone(),
            exclusions,
            timer,
            sink,
        ))
    }

    /// Start watching (blocking).
    ///
    /// Fails only if the notifier cannot be set up; afterwards it runs for as
    /// long as the notifier lives, which is the rest of the process.
    pub fn start(&self, sink: EventSink) -> SsyncResult<()> {
        let root = canonical_root(&self.options.root)?;

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| SsyncError::watcher_setup(&root, e))?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|e| SsyncError::watcher_setup(&root, e))?;

        let intake = self.intake(&root, Arc::clone(&sink))?;

        sink(WatchEvent::WatchStarted {
            root: self.options.root.display().to_string(),
            changes: self.options.filter.to_string(),
        });

        intake.run(rx);
        drop(watcher);
        Ok(())
    }
}

/// Notifiers report resolved paths (e.g. `/private/var` on macOS), so the
/// root used for relative paths must be resolved the same way.
fn canonical_root(root: &Path) -> SsyncResult<PathBuf> {
    root.canonicalize()
        .map_err(|e| SsyncError::WatcherSetup {
            path: root.to_path_buf(),
            message: e.to_string(),
        })
}
