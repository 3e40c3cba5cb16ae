//! Accessors and set-algebra over hash maps.
//!
//! Every function works on `std::collections::HashMap<K, V, S>` for any
//! hasher `S`, so it accepts both [`Mapping`](crate::Mapping) and maps built
//! elsewhere. Results that are new maps carry a clone of the left operand's
//! hasher.
//!
//! | Function           | Keys of the result      | Value on overlap | Mutates |
//! |--------------------|-------------------------|------------------|---------|
//! | [`union`]          | left ∪ right            | right            | no      |
//! | [`union_in_place`] | left ∪ right            | right            | `left`  |
//! | [`intersect`]      | left ∩ right            | right            | no      |
//! | [`difference`]     | left \ right            | (left)           | no      |
//!
//! Iteration order of every map, and therefore of [`keys`] and [`values`],
//! is unspecified.
//!
//! # Examples
//!
//! ```rust
//! use lambars_collections::Mapping;
//! use lambars_collections::mapping::{difference, intersect, union};
//!
//! let left: Mapping<i32, &str> = [(1, "one"), (3, "three")].into_iter().collect();
//! let right: Mapping<i32, &str> = [(3, "threeB"), (4, "four")].into_iter().collect();
//!
//! let combined = union(&left, &right);
//! assert_eq!(combined[&3], "threeB");
//! assert_eq!(combined.len(), 3);
//!
//! assert_eq!(intersect(&left, &right)[&3], "threeB");
//! assert_eq!(difference(&left, &right).len(), 1);
//! ```

mod accessors;
mod algebra;
mod ext;

pub use accessors::{into_keys, into_values, keys, values};
pub use algebra::{difference, intersect, union, union_in_place};
pub use ext::MappingExt;
