//! repowatch - semantic change notifications for git working copies
//!
//! Observes a working copy and its metadata directory, and turns bursts of raw
//! filesystem events into a small set of notifications: config changed, HEAD
//! moved, index changed, local/remote branch created/deleted/changed, and a
//! generic "repository changed" signal.
//!
//! ```no_run
//! use std::sync::Arc;
//! use repowatch::{discover, JsonListener, NotifyEventSource, RepositoryWatcher};
//!
//! # fn main() -> repowatch::WatchResult<()> {
//! let paths = discover(std::path::Path::new("."))?;
//! let watcher = RepositoryWatcher::new(paths, Arc::new(NotifyEventSource::new()));
//! watcher.add_listener(Arc::new(JsonListener::stdout()));
//! watcher.start()?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ListenerHandle, RepositoryWatcher, WatcherState, DEBOUNCE_MS};
pub use config::{Config, Verbosity};
pub use domain::entities::{RefDiff, RefSnapshot};
pub use domain::ports::{EventSink, RawEventSource, RepositoryListener, Subscription};
pub use domain::services::EventClassifier;
pub use domain::value_objects::{
    EventCategory, RawEvent, RawEventKind, RefTarget, RemoteBranch, RepositoryEvent,
    WatchedPaths,
};
pub use error::{WatchError, WatchResult};
pub use infrastructure::{discover, JsonListener, ManualEventSource, NotifyEventSource};
