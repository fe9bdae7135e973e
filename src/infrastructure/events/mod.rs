//! Event plumbing
//!
//! Raw event sources (implementations of `RawEventSource`):
//! - NotifyEventSource: native OS notifications or polling via `notify`
//! - ManualEventSource: events injected by the caller
//!
//! Listeners (implementations of `RepositoryListener`):
//! - JsonListener: NDJSON output for scripts/CI

mod json;
mod manual;
mod notify_source;

pub use json::{to_json, JsonListener};
pub use manual::ManualEventSource;
pub use notify_source::NotifyEventSource;
