//! RefSnapshot entity - last observed state of one reference tree
//!
//! Pure data; reading from disk is done by `infrastructure::refs`.

use std::collections::BTreeMap;

use crate::domain::value_objects::RefTarget;

/// Mapping from ref name (relative to its tree root) to resolved content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefSnapshot {
    refs: BTreeMap<String, RefTarget>,
}

impl RefSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, target: RefTarget) {
        self.refs.insert(name.into(), target);
    }

    pub fn get(&self, name: &str) -> Option<&RefTarget> {
        self.refs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.refs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Iterate refs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RefTarget)> {
        self.refs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Compare `self` (old) against `new`.
    ///
    /// Only the two end states are compared, so a ref deleted and recreated
    /// between them shows up at most once.
    pub fn diff(&self, new: &RefSnapshot) -> RefDiff {
        let mut diff = RefDiff::default();

        for (name, target) in &new.refs {
            match self.refs.get(name) {
                None => diff.created.push(name.clone()),
                Some(old) if old != target => diff.changed.push(name.clone()),
                Some(_) => {}
            }
        }

        diff.deleted = self
            .refs
            .keys()
            .filter(|name| !new.refs.contains_key(*name))
            .cloned()
            .collect();

        diff
    }
}

impl FromIterator<(String, RefTarget)> for RefSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, RefTarget)>>(iter: I) -> Self {
        Self {
            refs: iter.into_iter().collect(),
        }
    }
}

/// Created/deleted/changed ref names between two snapshots, each sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefDiff {
    pub created: Vec<String>,
    pub deleted: Vec<String>,
    pub changed: Vec<String>,
}

impl RefDiff {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.deleted.is_empty() && self.changed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.created.len() + self.deleted.len() + self.changed.len()
    }
}
