//! Property tests for snapshot diffing.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use repowatch::{RefSnapshot, RefTarget};

fn snapshot() -> impl Strategy<Value = BTreeMap<String, u8>> {
    // small name and value spaces so snapshots overlap often
    proptest::collection::btree_map("[a-d]{1,2}(/[a-d]{1,2})?", 0u8..3, 0..12)
}

fn build(map: &BTreeMap<String, u8>) -> RefSnapshot {
    map.iter()
        .map(|(name, v)| {
            let oid = format!("{:x}", v).repeat(40);
            (name.clone(), RefTarget::Object(oid))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: created/deleted/changed are disjoint and exactly cover the
    /// names whose presence or target differs.
    #[test]
    fn property_diff_partitions_differences(old in snapshot(), new in snapshot()) {
        let diff = build(&old).diff(&build(&new));

        let created: BTreeSet<_> = diff.created.iter().cloned().collect();
        let deleted: BTreeSet<_> = diff.deleted.iter().cloned().collect();
        let changed: BTreeSet<_> = diff.changed.iter().cloned().collect();

        prop_assert!(created.is_disjoint(&deleted));
        prop_assert!(created.is_disjoint(&changed));
        prop_assert!(deleted.is_disjoint(&changed));

        let expected_created: BTreeSet<_> =
            new.keys().filter(|k| !old.contains_key(*k)).cloned().collect();
        let expected_deleted: BTreeSet<_> =
            old.keys().filter(|k| !new.contains_key(*k)).cloned().collect();
        let expected_changed: BTreeSet<_> = new
            .iter()
            .filter(|(k, v)| old.get(*k).is_some_and(|o| o != *v))
            .map(|(k, _)| k.clone())
            .collect();

        prop_assert_eq!(created, expected_created);
        prop_assert_eq!(deleted, expected_deleted);
        prop_assert_eq!(changed, expected_changed);
    }

    /// PROPERTY: each group is sorted and free of duplicates.
    #[test]
    fn property_diff_groups_sorted(old in snapshot(), new in snapshot()) {
        let diff = build(&old).diff(&build(&new));
        for group in [&diff.created, &diff.deleted, &diff.changed] {
            prop_assert!(group.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// PROPERTY: diffing a snapshot against itself is empty.
    #[test]
    fn property_self_diff_is_empty(map in snapshot()) {
        let snapshot = build(&map);
        prop_assert!(snapshot.diff(&snapshot.clone()).is_empty());
    }
}
