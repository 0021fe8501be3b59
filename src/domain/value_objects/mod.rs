//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod change_kind;
mod endpoint;
mod exclusions;
mod path;

pub use change_kind::{ChangeFilter, ChangeKind, DEFAULT_CHANGES};
pub use endpoint::{is_local_argument, Direction, Endpoint, EndpointError, EndpointPair};
pub use exclusions::Exclusions;
pub use path::{clean_path, relative_path};
