//! Per-cycle accumulator

use std::collections::BTreeSet;

use crate::domain::value_objects::EventCategory;

/// What one debounce cycle has seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingDispatch {
    categories: BTreeSet<EventCategory>,
    status_affecting: bool,
    events_seen: usize,
}

impl PendingDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified raw event
    pub fn record(&mut self, category: EventCategory) {
        self.categories.insert(category);
        self.status_affecting |= category.is_status_affecting();
        self.events_seen += 1;
    }

    pub fn has(&self, category: EventCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_status_affecting(&self) -> bool {
        self.status_affecting
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of classified raw events folded into this cycle
    pub fn events_seen(&self) -> usize {
        self.events_seen
    }

    pub fn categories(&self) -> impl Iterator<Item = EventCategory> + '_ {
        self.categories.iter().copied()
    }
}
