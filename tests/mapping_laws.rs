#![cfg(feature = "mapping")]
//! Property-based tests for the mapping set-algebra.
//!
//! These tests verify the key algebra (union, intersection, difference)
//! and which operand each result value comes from.

use lambars_collections::Mapping;
use lambars_collections::mapping::{difference, intersect, keys, union, union_in_place, values};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn mapping_strategy() -> impl Strategy<Value = Mapping<u8, i32>> {
    prop::collection::vec((0u8..20, any::<i32>()), 0..30)
        .prop_map(|entries| entries.into_iter().collect())
}

fn key_set(mapping: &Mapping<u8, i32>) -> BTreeSet<u8> {
    mapping.keys().copied().collect()
}

// =============================================================================
// Union Key Law
// Description: keys(a ∪ b) = keys(a) ∪ keys(b), right value wins on overlap
// =============================================================================

proptest! {
    #[test]
    fn prop_union_keys_law(left in mapping_strategy(), right in mapping_strategy()) {
        let result = union(&left, &right);

        let expected: BTreeSet<u8> = key_set(&left).union(&key_set(&right)).copied().collect();
        prop_assert_eq!(key_set(&result), expected);

        for (key, value) in &result {
            let expected_value = right.get(key).or_else(|| left.get(key));
            prop_assert_eq!(Some(value), expected_value);
        }
    }

    #[test]
    fn prop_union_identity_law(mapping in mapping_strategy()) {
        let empty: Mapping<u8, i32> = Mapping::default();

        prop_assert_eq!(union(&mapping, &empty), mapping.clone());
        prop_assert_eq!(union(&empty, &mapping), mapping);
    }

    #[test]
    fn prop_union_with_self_is_identity(mapping in mapping_strategy()) {
        prop_assert_eq!(union(&mapping, &mapping), mapping);
    }
}

// =============================================================================
// UnionInPlace Law
// Description: after union_in_place(a, b), a == union(original a, b)
// =============================================================================

proptest! {
    #[test]
    fn prop_union_in_place_equals_union(left in mapping_strategy(), right in mapping_strategy()) {
        let expected = union(&left, &right);
        let mut target = left;

        let returned: *const Mapping<u8, i32> = union_in_place(&mut target, &right);

        prop_assert!(std::ptr::eq(returned, &target));
        prop_assert_eq!(target, expected);
    }
}

// =============================================================================
// Intersect Law
// Description: keys(a ∩ b) = keys(a) ∩ keys(b), value taken from b
// =============================================================================

proptest! {
    #[test]
    fn prop_intersect_keys_and_values_law(left in mapping_strategy(), right in mapping_strategy()) {
        let result = intersect(&left, &right);

        let expected: BTreeSet<u8> = key_set(&left).intersection(&key_set(&right)).copied().collect();
        prop_assert_eq!(key_set(&result), expected);

        for (key, value) in &result {
            prop_assert_eq!(Some(value), right.get(key));
        }
    }

    #[test]
    fn prop_intersect_with_self_is_identity(mapping in mapping_strategy()) {
        prop_assert_eq!(intersect(&mapping, &mapping), mapping);
    }
}

// =============================================================================
// Difference Law
// Description: keys(a \ b) = keys(a) \ keys(b), value taken from a
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_keys_and_values_law(left in mapping_strategy(), right in mapping_strategy()) {
        let result = difference(&left, &right);

        let expected: BTreeSet<u8> = key_set(&left).difference(&key_set(&right)).copied().collect();
        prop_assert_eq!(key_set(&result), expected);

        for (key, value) in &result {
            prop_assert_eq!(Some(value), left.get(key));
        }
    }

    #[test]
    fn prop_difference_and_intersect_partition_left(
        left in mapping_strategy(),
        right in mapping_strategy()
    ) {
        let only_left = difference(&left, &right);
        let shared = intersect(&left, &right);

        prop_assert_eq!(only_left.len() + shared.len(), left.len());
        prop_assert!(only_left.keys().all(|key| !shared.contains_key(key)));
    }

    #[test]
    fn prop_difference_with_self_is_empty(mapping in mapping_strategy()) {
        prop_assert!(difference(&mapping, &mapping).is_empty());
    }
}

// =============================================================================
// Accessor Laws
// Description: keys/values materialize every entry exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_keys_values_match_entries(mapping in mapping_strategy()) {
        let mut listed_keys = keys(&mapping);
        listed_keys.sort_unstable();
        let mut expected_keys: Vec<u8> = mapping.keys().copied().collect();
        expected_keys.sort_unstable();
        prop_assert_eq!(listed_keys, expected_keys);

        let mut listed_values = values(&mapping);
        listed_values.sort_unstable();
        let mut expected_values: Vec<i32> = mapping.values().copied().collect();
        expected_values.sort_unstable();
        prop_assert_eq!(listed_values, expected_values);
    }
}
