//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod transfer;

pub use transfer::{SyncInvocation, TransferError, TransferOptions, TransferRunner};
