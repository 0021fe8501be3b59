//! Domain Layer
//!
//! Pure logic of a sync session without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Endpoints, exclusion patterns, change kinds
//! - `ports/` - Interface to the external transfer tool

pub mod ports;
pub mod value_objects;
