//! Domain Layer
//!
//! Pure repository-watching logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Reference snapshots and their diffs
//! - `value_objects/` - Immutable value types (WatchedPaths, RawEvent, RepositoryEvent)
//! - `services/` - Event classification
//! - `ports/` - Interface definitions for infrastructure and consumers
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
