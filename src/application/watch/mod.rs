//! Watch Use Case
//!
//! Continuous re-sync driven by filesystem notifications:
//! - `ChangeIntake` - filters notifier events by kind and exclusion
//! - `DebounceTimer` - coalesces bursts into one sync per quiescence window
//! - `WatchUseCase` - wires the notifier, intake loop and timer together
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(session, runner, WatchOptions::new(root));
//! use_case.start(sink)?; // blocks
//! ```

mod debounce;
mod event;
mod use_case;


pub use debounce::DebounceTimer;
pub use event::{classify, ChangeEvent, EventSink, WatchEvent, WatchOptions, DEBOUNCE};
pub use use_case::{run_sync, ChangeIntake, WatchState, WatchUseCase};
