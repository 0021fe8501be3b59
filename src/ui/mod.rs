//! Terminal output for the ssync binary.
//!
//! Views return strings; commands decide where to print them.

pub mod blocks;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
