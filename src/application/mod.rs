//! Application Layer
//!
//! Orchestrates domain services and infrastructure into a running watcher.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain classification rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RepositoryWatcher` - Start/stop lifecycle, debounce and dispatch

pub mod watch;

pub use watch::{ListenerHandle, RepositoryWatcher, WatcherState, DEBOUNCE_MS};
