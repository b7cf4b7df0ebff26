//! Shared test utilities for snowflake tests

use std::collections::HashSet;

use crate::generator::time::test_clock::TestClock;
use crate::Snowflake;

/// 2023-11-14T22:13:20.123Z
pub const FIXED_MILLIS: i64 = 1_700_000_000_123;

/// Generator whose clock stays at `millis` until advanced
pub fn fixed_generator(millis: i64) -> Snowflake<TestClock> {
    Snowflake::with_clock(TestClock::at_millis(millis))
}

/// Parse a generated decimal snowflake
pub fn raw(id: &str) -> u64 {
    id.parse().expect("generated snowflake should parse as u64")
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in generation order
pub fn assert_ids_monotonic(ids: &[u64]) {
    for (i, pair) in ids.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i + 1,
            pair[1],
            pair[0]
        );
    }
}
