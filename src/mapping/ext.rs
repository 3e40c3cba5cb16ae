//! Method-call syntax for the mapping operations.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Exposes the mapping operations as methods on `HashMap`.
///
/// The accessors are called `key_list` and `value_list` because the
/// inherent `HashMap::keys` and `HashMap::values` would shadow methods of
/// those names.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use lambars_collections::mapping::MappingExt;
///
/// let mut settings = HashMap::from([("color", "red"), ("size", "small")]);
/// let overrides = HashMap::from([("size", "large")]);
///
/// assert_eq!(settings.intersect(&overrides), HashMap::from([("size", "large")]));
/// assert_eq!(settings.difference(&overrides), HashMap::from([("color", "red")]));
///
/// settings.union_in_place(&overrides);
/// assert_eq!(settings["size"], "large");
/// ```
pub trait MappingExt<K, V, S> {
    /// See [`keys`](crate::mapping::keys).
    fn key_list(&self) -> Vec<K>
    where
        K: Clone;

    /// See [`values`](crate::mapping::values).
    fn value_list(&self) -> Vec<V>
    where
        V: Clone;

    /// See [`union`](crate::mapping::union).
    fn union<R>(&self, other: &HashMap<K, V, R>) -> HashMap<K, V, S>
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher + Clone;

    /// See [`union_in_place`](crate::mapping::union_in_place).
    ///
    /// **Mutates `self`.**
    fn union_in_place<R>(&mut self, other: &HashMap<K, V, R>) -> &mut HashMap<K, V, S>
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher;

    /// See [`intersect`](crate::mapping::intersect).
    fn intersect<R>(&self, other: &HashMap<K, V, R>) -> HashMap<K, V, S>
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher + Clone,
        R: BuildHasher;

    /// See [`difference`](crate::mapping::difference).
    fn difference<R>(&self, other: &HashMap<K, V, R>) -> HashMap<K, V, S>
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher + Clone,
        R: BuildHasher;
}

impl<K, V, S> MappingExt<K, V, S> for HashMap<K, V, S> {
    #[inline]
    fn key_list(&self) -> Vec<K>
    where
        K: Clone,
    {
        super::keys(self)
    }

    #[inline]
    fn value_list(&self) -> Vec<V>
    where
        V: Clone,
    {
        super::values(self)
    }

    #[inline]
    fn union<R>(&self, other: &HashMap<K, V, R>) -> Self
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher + Clone,
    {
        super::union(self, other)
    }

    #[inline]
    fn union_in_place<R>(&mut self, other: &HashMap<K, V, R>) -> &mut Self
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher,
    {
        super::union_in_place(self, other)
    }

    #[inline]
    fn intersect<R>(&self, other: &HashMap<K, V, R>) -> Self
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher + Clone,
        R: BuildHasher,
    {
        super::intersect(self, other)
    }

    #[inline]
    fn difference<R>(&self, other: &HashMap<K, V, R>) -> Self
    where
        K: Eq + Hash + Clone,
        V: Clone,
        S: BuildHasher + Clone,
        R: BuildHasher,
    {
        super::difference(self, other)
    }
}
