//! Property tests for the player name predicate

use cfxscan::models::name_matches;
use proptest::prelude::*;

proptest! {
    #[test]
    fn name_always_matches_itself(name in "\\PC{0,24}") {
        prop_assert!(name_matches(&name, &name));
    }

    #[test]
    fn ascii_case_never_matters(name in "[a-zA-Z0-9_]{1,24}", start in 0usize..24, len in 0usize..24) {
        let start = start.min(name.len());
        let end = (start + len).min(name.len());
        let needle = &name[start..end];

        prop_assert!(name_matches(&needle.to_uppercase(), &name));
        prop_assert!(name_matches(&needle.to_lowercase(), &name.to_uppercase()));
    }

    #[test]
    fn longer_query_never_matches(name in "[a-z]{0,12}", extra in "[a-z]{1,4}") {
        let query = format!("{name}{extra}");
        prop_assert!(!name_matches(&query, &name));
    }
}

#[test]
fn test_examples() {
    assert!(name_matches("john", "JohnDoe"));
    assert!(name_matches("DOE", "JohnDoe"));
    assert!(name_matches("hnd", "JohnDoe"));
    assert!(!name_matches("johnny", "JohnDoe"));
}
