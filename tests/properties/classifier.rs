//! Property tests for event classification.

use std::path::PathBuf;

use proptest::prelude::*;

use repowatch::{EventCategory, EventClassifier, WatchedPaths};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".git".to_string()),
        Just("refs".to_string()),
        Just("heads".to_string()),
        Just("remotes".to_string()),
        Just("HEAD".to_string()),
        Just("index".to_string()),
        Just("config".to_string()),
        "[a-z]{1,6}",
    ]
}

fn relative_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..6).prop_map(|parts| parts.iter().collect())
}

fn classifier() -> EventClassifier {
    EventClassifier::new(WatchedPaths::standard("/work/repo", "/work/repo/.git"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: paths outside the metadata directory are always `Generic`.
    #[test]
    fn property_working_tree_paths_are_generic(rel in relative_path()) {
        prop_assume!(!rel.starts_with(".git"));
        let path = PathBuf::from("/work/repo").join(rel);
        prop_assert_eq!(classifier().classify(&path), Some(EventCategory::Generic));
    }

    /// PROPERTY: metadata paths never classify as `Generic`.
    #[test]
    fn property_metadata_paths_are_never_generic(rel in relative_path()) {
        let path = PathBuf::from("/work/repo/.git").join(rel);
        prop_assert_ne!(classifier().classify(&path), Some(EventCategory::Generic));
    }

    /// PROPERTY: anything under refs/heads is `LocalRefs`, under refs/remotes
    /// is `RemoteRefs`.
    #[test]
    fn property_ref_trees_classify_by_tree(rel in relative_path()) {
        let c = classifier();
        let local = PathBuf::from("/work/repo/.git/refs/heads").join(&rel);
        let remote = PathBuf::from("/work/repo/.git/refs/remotes").join(&rel);
        prop_assert_eq!(c.classify(&local), Some(EventCategory::LocalRefs));
        prop_assert_eq!(c.classify(&remote), Some(EventCategory::RemoteRefs));
    }

    /// PROPERTY: paths outside the repository are ignored.
    #[test]
    fn property_foreign_paths_ignored(rel in relative_path()) {
        let path = PathBuf::from("/elsewhere").join(rel);
        prop_assert_eq!(classifier().classify(&path), None);
    }
}
