//! Restartable deferred call
//!
//! A single slot holding at most one pending deadline. `reset` replaces any
//! pending deadline with `now + window`; a dedicated worker thread runs the
//! action once the deadline passes without another reset. The action runs on
//! the worker, so a reset that arrives while it is still running schedules
//! the next run for after it returns: runs never overlap.

use std::io;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Slot {
    deadline: Option<Instant>,
    #[cfg(test)]
    running: bool,
    shutdown: bool,
    #[cfg(test)]
    fired: u64,
}

#[derive(Debug)]
struct Shared {
    slot: Mutex<Slot>,
    wake: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Debounce timer owning its worker thread.
///
/// Dropping the timer discards any pending deadline and waits for an
/// in-flight action to finish.
#[derive(Debug)]
pub struct DebounceTimer {
    shared: Arc<Shared>,
    window: Duration,
    worker: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    /// Start the worker thread. Nothing runs until the first `reset`.
    pub fn spawn<F>(window: Duration, action: F) -> io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let shared = Arc::new(Shared {
            slot: Mutex::new(Slot::default()),
            wake: Condvar::new(),
        });

        let worker_shared = Arc::clone(&shared);
        let worker = thread::Builder::new()
            .name("ssync-debounce".to_string())
            .spawn(move || run_worker(&worker_shared, action))?;

        Ok(Self {
            shared,
            window,
            worker: Some(worker),
        })
    }

    /// Cancel the pending deadline (if any) and arm a new one.
    pub fn reset(&self) {
        let mut slot = self.shared.lock();
        slot.deadline = Some(Instant::now() + self.window);
        self.shared.wake.notify_one();
    }

    /// A deadline is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.shared.lock().deadline.is_some()
    }

    /// The action is executing right now.
    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.shared.lock().running
    }

    /// Number of completed action runs.
    #[cfg(test)]
    pub(crate) fn fire_count(&self) -> u64 {
        self.shared.lock().fired
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        {
            let mut slot = self.shared.lock();
            slot.shutdown = true;
            slot.deadline = None;
            self.shared.wake.notify_one();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run_worker<F: FnMut()>(shared: &Shared, mut action: F) {
    let mut slot = shared.lock();
    loop {
        if slot.shutdown {
            return;
        }

        let Some(deadline) = slot.deadline else {
            slot = shared
                .wake
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
            continue;
        };

        let now = Instant::now();
        if now < deadline {
            slot = shared
                .wake
                .wait_timeout(slot, deadline - now)
                .map(|(guard, _)| guard)
                .unwrap_or_else(|e| e.into_inner().0);
            continue;
        }

        slot.deadline = None;
        #[cfg(test)]
        {
            slot.running = true;
        }
        drop(slot);

        action();

        slot = shared.lock();
        #[cfg(test)]
        {
            slot.running = false;
            slot.fired += 1;
        }
    }
}
