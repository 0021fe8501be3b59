//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and everything that touches the
//! filesystem or spawns processes.
//!
//! ## Structure
//!
//! - `fs/` - Home directory resolution, ignore file loading
//! - `transfer/` - rsync-backed transfer runner

pub mod fs;
pub mod transfer;

pub use fs::{load_ignore_file, ssync_home_dir};
pub use transfer::RsyncTransfer;
