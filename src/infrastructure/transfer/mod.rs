//! Transfer runners

mod rsync;

pub use rsync::{RsyncTransfer, DEFAULT_PROGRAM};
