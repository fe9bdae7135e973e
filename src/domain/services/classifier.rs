//! Event Classifier Domain Service
//!
//! Maps a raw event path to the category it belongs to. Rules are checked in
//! priority order and the first match wins:
//!
//! 1. config file -> `Config`
//! 2. HEAD file -> `Head`
//! 3. index file -> `Index`
//! 4. inside the local refs tree -> `LocalRefs`
//! 5. inside the remote refs tree -> `RemoteRefs`
//! 6. inside the working tree but outside the metadata dir -> `Generic`
//!
//! Anything else (metadata housekeeping such as `index.lock`, `ORIG_HEAD`,
//! `logs/`, `objects/`, or paths outside the repository) is discarded.

use std::path::Path;

use crate::domain::value_objects::{EventCategory, WatchedPaths};

/// Classifies raw event paths against a fixed set of watched paths
#[derive(Debug, Clone)]
pub struct EventClassifier {
    paths: WatchedPaths,
}

impl EventClassifier {
    pub fn new(paths: WatchedPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &WatchedPaths {
        &self.paths
    }

    pub fn classify(&self, path: &Path) -> Option<EventCategory> {
        let p = &self.paths;

        if path == p.config_file() {
            Some(EventCategory::Config)
        } else if path == p.head_file() {
            Some(EventCategory::Head)
        } else if path == p.index_file() {
            Some(EventCategory::Index)
        } else if path.starts_with(p.local_refs_dir()) {
            Some(EventCategory::LocalRefs)
        } else if path.starts_with(p.remote_refs_dir()) {
            Some(EventCategory::RemoteRefs)
        } else if path.starts_with(p.metadata_dir()) {
            None
        } else if path.starts_with(p.repository_root()) {
            Some(EventCategory::Generic)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> EventClassifier {
        EventClassifier::new(WatchedPaths::standard("/repo", "/repo/.git"))
    }

    fn classify(path: &str) -> Option<EventCategory> {
        classifier().classify(Path::new(path))
    }

    #[test]
    fn recognizes_well_known_files() {
        assert_eq!(classify("/repo/.git/config"), Some(EventCategory::Config));
        assert_eq!(classify("/repo/.git/HEAD"), Some(EventCategory::Head));
        assert_eq!(classify("/repo/.git/index"), Some(EventCategory::Index));
    }

    #[test]
    fn recognizes_ref_trees_recursively() {
        assert_eq!(
            classify("/repo/.git/refs/heads/feature/document"),
            Some(EventCategory::LocalRefs)
        );
        assert_eq!(
            classify("/repo/.git/refs/heads"),
            Some(EventCategory::LocalRefs)
        );
        assert_eq!(
            classify("/repo/.git/refs/remotes/origin/master"),
            Some(EventCategory::RemoteRefs)
        );
        assert_eq!(
            classify("/repo/.git/refs/remotes/origin"),
            Some(EventCategory::RemoteRefs)
        );
    }

    #[test]
    fn working_tree_changes_are_generic() {
        assert_eq!(classify("/repo/foobar.txt"), Some(EventCategory::Generic));
        assert_eq!(
            classify("/repo/src/deep/file.rs"),
            Some(EventCategory::Generic)
        );
    }

    #[test]
    fn metadata_housekeeping_is_discarded() {
        assert_eq!(classify("/repo/.git/index.lock"), None);
        assert_eq!(classify("/repo/.git/ORIG_HEAD"), None);
        assert_eq!(classify("/repo/.git/logs/HEAD"), None);
        assert_eq!(classify("/repo/.git/objects/ab/cdef"), None);
        assert_eq!(classify("/repo/.git/refs/tags/v1"), None);
        assert_eq!(classify("/repo/.git"), None);
    }

    #[test]
    fn prefix_siblings_are_not_inside() {
        // "/repo/.gitignore" shares a string prefix with "/repo/.git"
        assert_eq!(classify("/repo/.gitignore"), Some(EventCategory::Generic));
        assert_eq!(
            classify("/repo/.git/refs/headsup"),
            None,
            "component-wise containment only"
        );
    }

    #[test]
    fn outside_repository_is_discarded() {
        assert_eq!(classify("/elsewhere/file.txt"), None);
        assert_eq!(classify("/repository/file.txt"), None);
    }

    #[test]
    fn linked_worktree_common_dir_refs() {
        let classifier = EventClassifier::new(WatchedPaths::with_common_dir(
            "/work/linked",
            "/work/main/.git/worktrees/linked",
            "/work/main/.git",
        ));
        assert_eq!(
            classifier.classify(Path::new("/work/main/.git/refs/heads/topic")),
            Some(EventCategory::LocalRefs)
        );
        assert_eq!(
            classifier.classify(Path::new("/work/main/.git/worktrees/linked/HEAD")),
            Some(EventCategory::Head)
        );
        // the main worktree's own HEAD is not ours
        assert_eq!(classifier.classify(Path::new("/work/main/.git/HEAD")), None);
    }
}
