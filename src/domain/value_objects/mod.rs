//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod raw_event;
mod ref_target;
mod repository_event;
mod watched_paths;

pub use raw_event::{EventCategory, RawEvent, RawEventKind};
pub use ref_target::{RefTarget, RemoteBranch};
pub use repository_event::RepositoryEvent;
pub use watched_paths::WatchedPaths;
