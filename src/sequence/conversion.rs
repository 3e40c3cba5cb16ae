//! Conversions from slices into maps and sets.
//!
//! The plain functions allocate with [`DefaultHashBuilder`]; the
//! `*_with_hasher` functions take the hasher from the caller.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use crate::hash::{DefaultHashBuilder, Mapping, Set};

// =============================================================================
// group_by
// =============================================================================

/// Groups elements by `key_selector`, collecting `value_selector` of each
/// member in input order.
///
/// A key appears only if at least one element produced it, so no group is
/// ever empty. For each element the key selector runs before the value
/// selector.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::group_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = group_by(&words, |word| word.as_bytes()[0], |word| word.len());
///
/// assert_eq!(by_initial[&b'a'], vec![5, 7]);
/// assert_eq!(by_initial[&b'b'], vec![6, 9]);
/// assert_eq!(by_initial[&b'c'], vec![6]);
/// assert_eq!(by_initial.len(), 3);
/// ```
#[must_use]
pub fn group_by<T, K, V, KS, VS>(
    sequence: &[T],
    key_selector: KS,
    value_selector: VS,
) -> Mapping<K, Vec<V>>
where
    K: Eq + Hash,
    KS: FnMut(&T) -> K,
    VS: FnMut(&T) -> V,
{
    group_by_with_hasher(
        sequence,
        key_selector,
        value_selector,
        DefaultHashBuilder::default(),
    )
}

/// [`group_by`] with a caller-supplied hasher.
///
/// # Examples
///
/// ```rust
/// use std::collections::hash_map::RandomState;
/// use lambars_collections::sequence::group_by_with_hasher;
///
/// let grouped = group_by_with_hasher(&[1, 2, 3, 4], |value| value % 2, |value| *value, RandomState::new());
/// assert_eq!(grouped[&0], vec![2, 4]);
/// ```
#[must_use]
pub fn group_by_with_hasher<T, K, V, S, KS, VS>(
    sequence: &[T],
    mut key_selector: KS,
    mut value_selector: VS,
    hash_builder: S,
) -> HashMap<K, Vec<V>, S>
where
    K: Eq + Hash,
    S: BuildHasher,
    KS: FnMut(&T) -> K,
    VS: FnMut(&T) -> V,
{
    let mut grouping: HashMap<K, Vec<V>, S> = HashMap::with_hasher(hash_builder);
    for element in sequence {
        let key = key_selector(element);
        grouping
            .entry(key)
            .or_default()
            .push(value_selector(element));
    }
    grouping
}

/// Like [`group_by`], but with selectors that can fail.
///
/// # Errors
///
/// Returns the first error produced by either selector. Nothing is called
/// for elements after the failing one.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::try_group_by;
///
/// let lines = ["a=1", "b=2", "a=3"];
/// let grouped = try_group_by(
///     &lines,
///     |line| line.split_once('=').map(|(key, _)| key.to_string()).ok_or("missing '='"),
///     |line| line[2..].parse::<i32>().map_err(|_| "not a number"),
/// );
/// assert_eq!(grouped.unwrap()["a"], vec![1, 3]);
///
/// let broken = try_group_by(
///     &["a=1", "oops"],
///     |line| line.split_once('=').map(|(key, _)| key.to_string()).ok_or("missing '='"),
///     |_| Ok(0),
/// );
/// assert_eq!(broken, Err("missing '='"));
/// ```
pub fn try_group_by<T, K, V, E, KS, VS>(
    sequence: &[T],
    mut key_selector: KS,
    mut value_selector: VS,
) -> Result<Mapping<K, Vec<V>>, E>
where
    K: Eq + Hash,
    KS: FnMut(&T) -> Result<K, E>,
    VS: FnMut(&T) -> Result<V, E>,
{
    let mut grouping: Mapping<K, Vec<V>> = HashMap::with_hasher(DefaultHashBuilder::default());
    for element in sequence {
        let key = key_selector(element)?;
        let value = value_selector(element)?;
        grouping.entry(key).or_default().push(value);
    }
    Ok(grouping)
}

// =============================================================================
// to_set
// =============================================================================

/// Collects the distinct keys produced by `key_selector`.
///
/// Duplicate keys collapse silently.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::to_set;
///
/// let ids = to_set(&[(1, "Alice"), (2, "Bob"), (1, "Carol")], |(id, _)| *id);
/// assert_eq!(ids.len(), 2);
/// assert!(ids.contains(&1));
/// assert!(ids.contains(&2));
/// ```
#[must_use]
pub fn to_set<T, K, KS>(sequence: &[T], key_selector: KS) -> Set<K>
where
    K: Eq + Hash,
    KS: FnMut(&T) -> K,
{
    to_set_with_hasher(sequence, key_selector, DefaultHashBuilder::default())
}

/// [`to_set`] with a caller-supplied hasher.
#[must_use]
pub fn to_set_with_hasher<T, K, S, KS>(
    sequence: &[T],
    key_selector: KS,
    hash_builder: S,
) -> HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
    KS: FnMut(&T) -> K,
{
    let mut set = HashSet::with_capacity_and_hasher(sequence.len(), hash_builder);
    set.extend(sequence.iter().map(key_selector));
    set
}

// =============================================================================
// to_map
// =============================================================================

/// Builds a map from `key_selector` to `value_selector` for each element.
///
/// When several elements produce the same key, the value of the one that
/// comes last in `sequence` is kept.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::to_map;
///
/// let records = [(1, "A"), (1, "B"), (2, "C")];
/// let by_id = to_map(&records, |(id, _)| *id, |(_, name)| *name);
///
/// assert_eq!(by_id[&1], "B");
/// assert_eq!(by_id[&2], "C");
/// ```
#[must_use]
pub fn to_map<T, K, V, KS, VS>(sequence: &[T], key_selector: KS, value_selector: VS) -> Mapping<K, V>
where
    K: Eq + Hash,
    KS: FnMut(&T) -> K,
    VS: FnMut(&T) -> V,
{
    to_map_with_hasher(
        sequence,
        key_selector,
        value_selector,
        DefaultHashBuilder::default(),
    )
}

/// [`to_map`] with a caller-supplied hasher.
#[must_use]
pub fn to_map_with_hasher<T, K, V, S, KS, VS>(
    sequence: &[T],
    mut key_selector: KS,
    mut value_selector: VS,
    hash_builder: S,
) -> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
    KS: FnMut(&T) -> K,
    VS: FnMut(&T) -> V,
{
    let mut mapping = HashMap::with_capacity_and_hasher(sequence.len(), hash_builder);
    for element in sequence {
        let key = key_selector(element);
        mapping.insert(key, value_selector(element));
    }
    mapping
}

/// Like [`to_map`], but with selectors that can fail.
///
/// # Errors
///
/// Returns the first error produced by either selector. Nothing is called
/// for elements after the failing one.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::try_to_map;
///
/// let pairs = ["x:1", "y:2", "x:3"];
/// let parsed = try_to_map(
///     &pairs,
///     |pair| pair.split_once(':').map(|(key, _)| key.to_string()).ok_or("no key"),
///     |pair| pair.split_once(':').map(|(_, value)| value.to_string()).ok_or("no value"),
/// );
/// assert_eq!(parsed.unwrap()["x"], "3");
/// ```
pub fn try_to_map<T, K, V, E, KS, VS>(
    sequence: &[T],
    mut key_selector: KS,
    mut value_selector: VS,
) -> Result<Mapping<K, V>, E>
where
    K: Eq + Hash,
    KS: FnMut(&T) -> Result<K, E>,
    VS: FnMut(&T) -> Result<V, E>,
{
    let mut mapping: Mapping<K, V> =
        HashMap::with_capacity_and_hasher(sequence.len(), DefaultHashBuilder::default());
    for element in sequence {
        let key = key_selector(element)?;
        let value = value_selector(element)?;
        mapping.insert(key, value);
    }
    Ok(mapping)
}
