//! # lambars-collections
//!
//! Higher-order helpers over slices and hash maps: filtering, searching,
//! transforming, grouping, conversion to sets and maps, and set-algebra on
//! maps.
//!
//! ## Overview
//!
//! Every operation is a pure, synchronous pass over an in-memory container
//! driven by caller-supplied callbacks. Inputs are never mutated, with one
//! exception: [`mapping::union_in_place`], which writes into its left operand.
//!
//! - **Sequence operations**: `filter`, `find_first`, `find_last`,
//!   `any_match`, `all_match`, `transform`, `contains`, `index_of`
//! - **Sequence to mapping conversions**: `group_by`, `to_set`, `to_map`
//! - **Mapping accessors**: `keys`, `values`
//! - **Mapping set-algebra**: `union`, `union_in_place`, `intersect`,
//!   `difference`
//!
//! ## Feature Flags
//!
//! - `sequence`: Slice operations and slice-to-map conversions
//! - `mapping`: Map accessors and map set-algebra
//! - `fxhash`: Use `rustc-hash` for [`Mapping`] and [`Set`]
//! - `ahash`: Use `ahash` for [`Mapping`] and [`Set`]
//! - `full`: Enable all operation modules
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "sequence")]
//! # {
//! use lambars_collections::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! let evens = filter(&numbers, |number| number % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let by_parity = group_by(&numbers, |number| number % 2, |number| *number);
//! assert_eq!(by_parity[&1], vec![1, 3, 5]);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the operation modules, the extension traits and the
/// hashing aliases.
///
/// # Usage
///
/// ```rust
/// use lambars_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::hash::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;
}

pub mod hash;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "mapping")]
pub mod mapping;

pub use hash::{DefaultHashBuilder, Mapping, Set};
