//! Union, intersection and difference of hash maps.
//!
//! The right operand may use a different hasher from the left one; results
//! always take the left operand's hasher.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a new map holding every entry of `left` and `right`.
///
/// On a shared key the value from `right` wins. Neither input is modified;
/// see [`union_in_place`] for the mutating form.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lambars_collections::mapping::union;
///
/// let left = HashMap::from([(1, "one"), (3, "three")]);
/// let right = HashMap::from([(3, "threeB"), (4, "four")]);
///
/// let expected = HashMap::from([(1, "one"), (3, "threeB"), (4, "four")]);
/// assert_eq!(union(&left, &right), expected);
/// assert_eq!(left[&3], "three");
/// ```
#[must_use]
pub fn union<K, V, S, R>(left: &HashMap<K, V, S>, right: &HashMap<K, V, R>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut result = left.clone();
    union_in_place(&mut result, right);
    result
}

/// Writes every entry of `right` into `left` and returns `left`.
///
/// **This mutates `left`.** It is the only operation in the crate that
/// changes a caller-owned input. Entries of `left` whose key also appears
/// in `right` are overwritten with `right`'s value; other entries of `left`
/// stay. Afterwards `left` equals what [`union`] would have returned for the
/// original `left`.
///
/// The returned reference is `left` itself, for chaining.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lambars_collections::mapping::union_in_place;
///
/// let mut left = HashMap::from([(1, "one"), (2, "two")]);
/// let extra = HashMap::from([(2, "twoB")]);
/// let more = HashMap::from([(5, "five")]);
///
/// union_in_place(union_in_place(&mut left, &extra), &more);
///
/// assert_eq!(left, HashMap::from([(1, "one"), (2, "twoB"), (5, "five")]));
/// ```
pub fn union_in_place<'a, K, V, S, R>(
    left: &'a mut HashMap<K, V, S>,
    right: &HashMap<K, V, R>,
) -> &'a mut HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    left.extend(
        right
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    left
}

/// Returns a new map holding the keys present in both `left` and `right`.
///
/// The value comes from **`right`**, not `left`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lambars_collections::mapping::intersect;
///
/// let left = HashMap::from([(1, "x"), (3, "y"), (5, "only left")]);
/// let right = HashMap::from([(3, "z"), (1, "w")]);
///
/// assert_eq!(intersect(&left, &right), HashMap::from([(1, "w"), (3, "z")]));
/// ```
#[must_use]
pub fn intersect<K, V, S, R>(left: &HashMap<K, V, S>, right: &HashMap<K, V, R>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    R: BuildHasher,
{
    let mut result = HashMap::with_hasher(left.hasher().clone());
    for key in left.keys() {
        if let Some(value) = right.get(key) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Returns a new map holding the entries of `left` whose key is absent from
/// `right`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lambars_collections::mapping::difference;
///
/// let left = HashMap::from([(1, "x"), (2, "y")]);
/// let right = HashMap::from([(2, "z")]);
///
/// assert_eq!(difference(&left, &right), HashMap::from([(1, "x")]));
/// ```
#[must_use]
pub fn difference<K, V, S, R>(left: &HashMap<K, V, S>, right: &HashMap<K, V, R>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    R: BuildHasher,
{
    let mut result = HashMap::with_hasher(left.hasher().clone());
    for (key, value) in left {
        if !right.contains_key(key) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Mapping;
    use rstest::rstest;
    use std::collections::hash_map::RandomState;

    fn mapping(entries: &[(i32, &'static str)]) -> Mapping<i32, &'static str> {
        entries.iter().copied().collect()
    }

    fn left() -> Mapping<i32, &'static str> {
        mapping(&[(1, "one"), (2, "two"), (3, "three")])
    }

    fn right() -> Mapping<i32, &'static str> {
        mapping(&[(3, "threeb"), (4, "four"), (5, "five"), (1, "one")])
    }

    // =========================================================================
    // union / union_in_place
    // =========================================================================

    #[rstest]
    fn union_prefers_right_on_overlap() {
        let expected = mapping(&[
            (1, "one"),
            (2, "two"),
            (3, "threeb"),
            (4, "four"),
            (5, "five"),
        ]);
        assert_eq!(union(&left(), &right()), expected);
    }

    #[rstest]
    fn union_leaves_inputs_untouched() {
        let first = left();
        let second = right();
        let _ = union(&first, &second);
        assert_eq!(first, left());
        assert_eq!(second, right());
    }

    #[rstest]
    fn union_in_place_mutates_left_and_returns_it() {
        let mut first = left();
        let second = right();
        let expected = union(&first, &second);

        let returned: *const Mapping<i32, &str> = union_in_place(&mut first, &second);

        assert!(std::ptr::eq(returned, std::ptr::from_ref(&first)));
        assert_eq!(first, expected);
        assert_eq!(second, right());
    }

    #[rstest]
    fn union_in_place_with_empty_right_is_identity() {
        let mut first = left();
        let empty = Mapping::default();
        union_in_place(&mut first, &empty);
        assert_eq!(first, left());
    }

    #[rstest]
    fn union_accepts_right_with_other_hasher() {
        let other: std::collections::HashMap<i32, &str, RandomState> =
            std::collections::HashMap::from([(2, "deux")]);
        let result = union(&left(), &other);
        assert_eq!(result[&2], "deux");
        assert_eq!(result.len(), 3);
    }

    // =========================================================================
    // intersect
    // =========================================================================

    #[rstest]
    fn intersect_takes_value_from_right() {
        let expected = mapping(&[(1, "one"), (3, "threeb")]);
        assert_eq!(intersect(&left(), &right()), expected);
    }

    #[rstest]
    fn intersect_value_provenance_is_right() {
        let first = mapping(&[(1, "x"), (3, "y")]);
        let second = mapping(&[(3, "z"), (1, "w")]);
        assert_eq!(intersect(&first, &second), mapping(&[(1, "w"), (3, "z")]));
        assert_eq!(intersect(&second, &first), mapping(&[(1, "x"), (3, "y")]));
    }

    #[rstest]
    fn intersect_with_disjoint_mapping_is_empty() {
        let first = mapping(&[(1, "a")]);
        let second = mapping(&[(2, "b")]);
        assert!(intersect(&first, &second).is_empty());
    }

    // =========================================================================
    // difference
    // =========================================================================

    #[rstest]
    fn difference_keeps_left_only_keys() {
        assert_eq!(difference(&left(), &right()), mapping(&[(2, "two")]));
    }

    #[rstest]
    fn difference_keeps_left_value() {
        let first = mapping(&[(1, "x"), (2, "y")]);
        let second = mapping(&[(2, "z")]);
        assert_eq!(difference(&first, &second), mapping(&[(1, "x")]));
    }

    #[rstest]
    fn difference_with_empty_right_is_left() {
        assert_eq!(difference(&left(), &Mapping::default()), left());
    }
}
