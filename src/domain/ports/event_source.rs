//! Raw Event Source port
//!
//! The OS-level primitive that reports filesystem mutations for a set of
//! directory trees. Delivery happens on the source's own thread(s); the sink
//! must only enqueue.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::value_objects::RawEvent;
use crate::error::WatchResult;

/// Callback invoked by a source for every raw event
pub type EventSink = Arc<dyn Fn(RawEvent) + Send + Sync>;

/// An active subscription. Dropping it unsubscribes.
pub trait Subscription: Send {}

/// Something that can recursively watch directory trees
///
/// Implementations:
/// - `NotifyEventSource` - native OS notifications via `notify`
/// - `ManualEventSource` - events injected by the caller
pub trait RawEventSource: Send + Sync {
    /// Start delivering events under every root to `sink`.
    ///
    /// Failure to watch any root fails the whole subscription.
    fn subscribe(&self, roots: &[PathBuf], sink: EventSink) -> WatchResult<Box<dyn Subscription>>;
}
