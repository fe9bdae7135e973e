//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Raw event sources and output listeners
//! - `refs` - Reading reference trees and HEAD from disk
//! - `discovery` - Resolving a working copy into its watched paths

pub mod discovery;
pub mod events;
pub mod refs;

// Re-export for convenience
pub use discovery::{discover, normalize};
pub use events::{JsonListener, ManualEventSource, NotifyEventSource};
