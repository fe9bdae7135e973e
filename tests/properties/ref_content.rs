//! Property tests for reference content decoding.

use proptest::prelude::*;

use repowatch::{RefTarget, RemoteBranch};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `RefTarget::parse` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,128}") {
        let _ = RefTarget::parse(&content);
    }

    /// PROPERTY: any 40-digit hex id decodes, with surrounding whitespace.
    #[test]
    fn property_object_ids_decode(oid in "[0-9a-f]{40}", pad in "[ \n\r\t]{0,3}") {
        let content = format!("{pad}{oid}{pad}");
        prop_assert_eq!(RefTarget::parse(&content), Ok(RefTarget::Object(oid)));
    }

    /// PROPERTY: remote keys split at the first separator only.
    #[test]
    fn property_remote_split_at_first_slash(
        remote in "[a-z]{1,8}",
        branch in "[a-z]{1,6}(/[a-z]{1,6}){0,2}",
    ) {
        let parsed = RemoteBranch::parse(&format!("{remote}/{branch}"));
        prop_assert_eq!(
            parsed,
            Some(RemoteBranch { remote, branch })
        );
    }
}
