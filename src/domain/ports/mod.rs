//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod event_source;
pub mod listener;

pub use event_source::{EventSink, RawEventSource, Subscription};
pub use listener::{NoopListener, RepositoryListener};
