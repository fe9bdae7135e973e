//! Listener registry
//!
//! Listeners are registered behind opaque handles. Removing a handle takes
//! effect from the next dispatch cycle on.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::ports::RepositoryListener;
use crate::domain::value_objects::RepositoryEvent;

/// Identifies one registration; returned by `add`, consumed by `remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

#[derive(Default)]
struct Registrations {
    next_id: u64,
    entries: Vec<(ListenerHandle, Arc<dyn RepositoryListener>)>,
}

#[derive(Default)]
pub struct ListenerRegistry {
    inner: Mutex<Registrations>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Arc<dyn RepositoryListener>) -> ListenerHandle {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let handle = ListenerHandle(inner.next_id);
        inner.next_id += 1;
        inner.entries.push((handle, listener));
        handle
    }

    /// Returns false if the handle was not registered
    pub fn remove(&self, handle: ListenerHandle) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = inner.entries.len();
        inner.entries.retain(|(h, _)| *h != handle);
        inner.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver a cycle's notifications, in order, to every listener.
    ///
    /// The registration list is copied first so listeners may add or remove
    /// registrations from inside a callback.
    pub fn dispatch(&self, events: &[RepositoryEvent]) {
        if events.is_empty() {
            return;
        }
        let listeners: Vec<Arc<dyn RepositoryListener>> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for event in events {
            for listener in &listeners {
                listener.on_event(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<RepositoryEvent>>,
    }

    impl RepositoryListener for Recorder {
        fn on_event(&self, event: &RepositoryEvent) {
            self.seen.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn dispatch_reaches_every_listener_in_order() {
        let registry = ListenerRegistry::new();
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        registry.add(a.clone());
        registry.add(b.clone());

        let events = vec![RepositoryEvent::ConfigChanged, RepositoryEvent::RepositoryChanged];
        registry.dispatch(&events);

        assert_eq!(*a.seen.lock().unwrap(), events);
        assert_eq!(*b.seen.lock().unwrap(), events);
    }

    #[test]
    fn removed_listener_stops_receiving() {
        let registry = ListenerRegistry::new();
        let recorder = Arc::new(Recorder::default());
        let handle = registry.add(recorder.clone());

        assert!(registry.remove(handle));
        assert!(!registry.remove(handle));
        assert!(registry.is_empty());

        registry.dispatch(&[RepositoryEvent::IndexChanged]);
        assert!(recorder.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn handles_are_unique() {
        let registry = ListenerRegistry::new();
        let recorder: Arc<dyn RepositoryListener> = Arc::new(Recorder::default());
        let h1 = registry.add(recorder.clone());
        let h2 = registry.add(recorder);
        assert_ne!(h1, h2);
        assert_eq!(registry.len(), 2);
    }
}
