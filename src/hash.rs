//! Hasher selection for the maps and sets this crate builds.
//!
//! Conversions such as [`to_map`](crate::sequence::to_map) have to pick a
//! concrete hasher for the collections they allocate. That choice is made
//! here, at build time, through Cargo features:
//!
//! | Features enabled     | [`DefaultHashBuilder`]                        |
//! |----------------------|-----------------------------------------------|
//! | none                 | `std::collections::hash_map::RandomState`     |
//! | `ahash`              | `ahash::RandomState`                          |
//! | `fxhash`             | `rustc_hash::FxBuildHasher`                   |
//! | `fxhash` and `ahash` | `rustc_hash::FxBuildHasher`                   |
//!
//! Operations that only read or combine existing maps, such as
//! [`union`](crate::mapping::union), are generic over the hasher and keep
//! whatever hasher their inputs carry.
//!
//! # Examples
//!
//! ```rust
//! use lambars_collections::hash::{Mapping, Set};
//!
//! let mut mapping: Mapping<&str, i32> = Mapping::default();
//! mapping.insert("one", 1);
//! assert_eq!(mapping.get("one"), Some(&1));
//!
//! let set: Set<i32> = [1, 2, 2, 3].into_iter().collect();
//! assert_eq!(set.len(), 3);
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

/// The hasher used by [`Mapping`] and [`Set`].
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used by [`Mapping`] and [`Set`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher used by [`Mapping`] and [`Set`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// An unordered collection of unique keys, each bound to one value.
///
/// Iteration order is unspecified and may differ between two mappings
/// holding the same entries.
pub type Mapping<K, V> = HashMap<K, V, DefaultHashBuilder>;

/// A membership-only mapping.
pub type Set<K> = HashSet<K, DefaultHashBuilder>;

static_assertions::assert_impl_all!(DefaultHashBuilder: BuildHasher, Default, Clone, Send, Sync);
static_assertions::assert_impl_all!(Mapping<String, i32>: Default, Clone, PartialEq);
static_assertions::assert_impl_all!(Set<String>: Default, Clone, PartialEq);

/// Creates an empty [`Mapping`] with room for `capacity` entries.
#[inline]
#[must_use]
pub fn mapping_with_capacity<K, V>(capacity: usize) -> Mapping<K, V> {
    HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
}

/// Creates an empty [`Set`] with room for `capacity` keys.
#[inline]
#[must_use]
pub fn set_with_capacity<K>(capacity: usize) -> Set<K> {
    HashSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
}
