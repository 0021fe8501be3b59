//! Command handlers for the ssync binary

pub mod sync;
