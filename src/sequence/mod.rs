//! Operations over ordered sequences.
//!
//! A sequence is borrowed as a slice `&[T]` and is never mutated. Operations
//! that produce a sequence allocate a new `Vec` and keep the relative order
//! of the input; operations that produce a map or set allocate a new
//! [`Mapping`](crate::Mapping) or [`Set`](crate::Set).
//!
//! Callbacks receive elements by reference, are called in input order and
//! are called at most once per element visited. A panicking callback
//! unwinds straight through the operation; callbacks that can fail without
//! panicking go through the `try_*` variants, which stop at the first `Err`
//! and hand it back unchanged.
//!
//! # Absent values
//!
//! [`find_first`] and [`find_last`] return `T::default()` when nothing
//! matches, and [`index_of`] returns [`NOT_FOUND`]. A default-valued element
//! that *does* match is indistinguishable from a miss. Use [`first_match`],
//! [`last_match`] and [`position_of`] when that matters.
//!
//! # Examples
//!
//! ```rust
//! use lambars_collections::sequence::{filter, find_first, index_of, to_map, NOT_FOUND};
//!
//! let values = vec![-3, -2, -1, 0, 1, 2, 3];
//! assert_eq!(filter(&values, |value| *value > 0), vec![1, 2, 3]);
//! assert_eq!(find_first(&values, |value| *value > 0), 1);
//! assert_eq!(index_of(&values, &0), 3);
//! assert_eq!(index_of(&values, &7), NOT_FOUND);
//!
//! let squares = to_map(&values, |value| *value, |value| value * value);
//! assert_eq!(squares[&-3], 9);
//! ```

mod conversion;
mod ext;
mod query;
mod transform;

pub use conversion::{
    group_by, group_by_with_hasher, to_map, to_map_with_hasher, to_set, to_set_with_hasher,
    try_group_by, try_to_map,
};
pub use ext::SequenceExt;
pub use query::{
    NOT_FOUND, all_match, any_match, contains, filter, find_first, find_last, first_match,
    index_of, last_match, position_of, try_filter,
};
pub use transform::{transform, try_transform};
