//! In-process event source
//!
//! Delivers events the caller injects with [`ManualEventSource::emit`]. Used
//! to drive a watcher deterministically (tests, replay tools, or embedders
//! that already have their own notification mechanism).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::ports::{EventSink, RawEventSource, Subscription};
use crate::domain::value_objects::{RawEvent, RawEventKind};
use crate::error::{WatchError, WatchResult};

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    active: Vec<(u64, EventSink)>,
}

/// Event source fed by explicit `emit` calls
#[derive(Clone, Default)]
pub struct ManualEventSource {
    subscribers: Arc<Mutex<Subscribers>>,
    refuse: bool,
}

impl ManualEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose subscriptions always fail
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    /// Deliver an event to every active subscription
    pub fn emit(&self, event: RawEvent) {
        // clone the sinks so a sink may unsubscribe without deadlocking
        let sinks: Vec<EventSink> = match self.subscribers.lock() {
            Ok(subs) => subs.active.iter().map(|(_, s)| s.clone()).collect(),
            Err(_) => return,
        };
        for sink in sinks {
            sink(event.clone());
        }
    }

    /// Shorthand for emitting a `Modified` event
    pub fn touch(&self, path: impl Into<PathBuf>) {
        self.emit(RawEvent::new(path, RawEventKind::Modified));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .map(|subs| subs.active.len())
            .unwrap_or(0)
    }
}

struct ManualSubscription {
    id: u64,
    subscribers: Arc<Mutex<Subscribers>>,
}

impl Subscription for ManualSubscription {}

impl Drop for ManualSubscription {
    fn drop(&mut self) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.active.retain(|(id, _)| *id != self.id);
        }
    }
}

impl RawEventSource for ManualEventSource {
    fn subscribe(&self, roots: &[PathBuf], sink: EventSink) -> WatchResult<Box<dyn Subscription>> {
        if self.refuse {
            let path = roots.first().cloned().unwrap_or_default();
            return Err(WatchError::subscribe(path, "subscription refused"));
        }

        let mut subs = self
            .subscribers
            .lock()
            .map_err(|_| WatchError::subscribe(PathBuf::new(), "subscriber list poisoned"))?;
        let id = subs.next_id;
        subs.next_id += 1;
        subs.active.push((id, sink));

        Ok(Box::new(ManualSubscription {
            id,
            subscribers: Arc::clone(&self.subscribers),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn emit_reaches_subscribers_until_dropped() {
        let source = ManualEventSource::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let sink: EventSink = Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let subscription = source.subscribe(&[PathBuf::from("/repo")], sink).unwrap();
        assert_eq!(source.subscriber_count(), 1);

        source.touch("/repo/a.txt");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(subscription);
        assert_eq!(source.subscriber_count(), 0);
        source.touch("/repo/a.txt");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn refusing_source_fails_subscribe() {
        let source = ManualEventSource::refusing();
        let sink: EventSink = Arc::new(|_| {});
        assert!(matches!(
            source.subscribe(&[PathBuf::from("/repo")], sink),
            Err(WatchError::Subscribe { .. })
        ));
    }
}
