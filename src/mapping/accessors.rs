//! Materializing the keys or values of a map into a `Vec`.
//!
//! Output order follows the map's internal enumeration and must not be
//! relied on, not even between two calls on maps with equal contents.

use std::collections::HashMap;

/// Returns a clone of every key in `mapping`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lambars_collections::mapping::keys;
///
/// let mapping = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
/// let mut result = keys(&mapping);
/// result.sort_unstable();
/// assert_eq!(result, vec![1, 2, 3]);
/// ```
#[must_use]
pub fn keys<K, V, S>(mapping: &HashMap<K, V, S>) -> Vec<K>
where
    K: Clone,
{
    mapping.keys().cloned().collect()
}

/// Returns a clone of every value in `mapping`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lambars_collections::mapping::values;
///
/// let mapping = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
/// let mut result = values(&mapping);
/// result.sort_unstable();
/// assert_eq!(result, vec!["one", "three", "two"]);
/// ```
#[must_use]
pub fn values<K, V, S>(mapping: &HashMap<K, V, S>) -> Vec<V>
where
    V: Clone,
{
    mapping.values().cloned().collect()
}

/// Consumes `mapping` and returns its keys.
#[must_use]
pub fn into_keys<K, V, S>(mapping: HashMap<K, V, S>) -> Vec<K> {
    mapping.into_keys().collect()
}

/// Consumes `mapping` and returns its values.
#[must_use]
pub fn into_values<K, V, S>(mapping: HashMap<K, V, S>) -> Vec<V> {
    mapping.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Mapping;
    use rstest::rstest;

    fn numbers() -> Mapping<i32, String> {
        [(1, "one"), (2, "two"), (3, "three")]
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect()
    }

    fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
        items.sort();
        items
    }

    #[rstest]
    fn keys_returns_every_key() {
        assert_eq!(sorted(keys(&numbers())), vec![1, 2, 3]);
    }

    #[rstest]
    fn values_returns_every_value() {
        assert_eq!(
            sorted(values(&numbers())),
            vec!["one".to_string(), "three".to_string(), "two".to_string()]
        );
    }

    #[rstest]
    fn keys_and_values_of_empty_mapping() {
        let empty: Mapping<i32, String> = Mapping::default();
        assert!(keys(&empty).is_empty());
        assert!(values(&empty).is_empty());
    }

    #[rstest]
    fn keys_and_values_have_mapping_length() {
        let mapping = numbers();
        assert_eq!(keys(&mapping).len(), mapping.len());
        assert_eq!(values(&mapping).len(), mapping.len());
    }

    #[rstest]
    fn into_keys_and_into_values_consume_mapping() {
        assert_eq!(sorted(into_keys(numbers())), vec![1, 2, 3]);
        assert_eq!(sorted(into_values(numbers())).len(), 3);
    }

    #[rstest]
    fn keys_leaves_mapping_untouched() {
        let mapping = numbers();
        let _ = keys(&mapping);
        assert_eq!(mapping, numbers());
    }
}
