//! Filtering, searching and membership over slices.

// =============================================================================
// Filtering
// =============================================================================

/// Returns the elements of `sequence` for which `predicate` holds, in their
/// original order.
///
/// The result is empty, never absent, when `sequence` is empty or nothing
/// matches.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::filter;
///
/// let words = vec!["asdasd", "123123", "test", "test123123"];
/// assert_eq!(filter(&words, |word| *word == "test"), vec!["test"]);
/// assert!(filter(&words, |word| word.is_empty()).is_empty());
/// ```
#[must_use]
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|element| predicate(*element))
        .cloned()
        .collect()
}

/// Like [`filter`], but with a predicate that can fail.
///
/// The first `Err` stops the scan and is returned as is; the predicate is
/// not called for any later element.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::try_filter;
///
/// let inputs = vec!["1", "22", "333"];
/// let long: Result<Vec<&str>, String> = try_filter(&inputs, |input| Ok(input.len() > 1));
/// assert_eq!(long, Ok(vec!["22", "333"]));
///
/// let failed: Result<Vec<&str>, String> =
///     try_filter(&inputs, |input| input.parse::<u8>().map(|_| true).map_err(|error| error.to_string()));
/// assert!(failed.is_err());
/// ```
pub fn try_filter<T, E, P>(sequence: &[T], mut predicate: P) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut selected = Vec::new();
    for element in sequence {
        if predicate(element)? {
            selected.push(element.clone());
        }
    }
    Ok(selected)
}

// =============================================================================
// Searching
// =============================================================================

/// Returns a clone of the first element (lowest index) satisfying
/// `predicate`, or `T::default()` when none does.
///
/// A matching element equal to `T::default()` cannot be told apart from a
/// miss. [`first_match`] reports absence as `None` instead.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::find_first;
///
/// assert_eq!(find_first(&[-3, -2, -1, 0, 1, 2, 3], |value| *value > 0), 1);
/// assert_eq!(find_first(&[1, 2, 3], |value| *value < 0), 0);
/// ```
#[must_use]
pub fn find_first<T, P>(sequence: &[T], predicate: P) -> T
where
    T: Clone + Default,
    P: FnMut(&T) -> bool,
{
    first_match(sequence, predicate)
        .cloned()
        .unwrap_or_default()
}

/// Returns a clone of the last element (highest index) satisfying
/// `predicate`, or `T::default()` when none does.
///
/// Scans from the end, so the predicate is called on trailing elements
/// first. Shares the ambiguity described on [`find_first`].
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::find_last;
///
/// assert_eq!(find_last(&[-3, -2, -1, 0, 1, 2, 3], |value| *value > 0), 3);
/// assert_eq!(find_last(&[1, 2, 3], |value| *value < 0), 0);
/// ```
#[must_use]
pub fn find_last<T, P>(sequence: &[T], predicate: P) -> T
where
    T: Clone + Default,
    P: FnMut(&T) -> bool,
{
    last_match(sequence, predicate).cloned().unwrap_or_default()
}

/// Returns a reference to the first element satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::first_match;
///
/// let values = vec![3, 0, 5];
/// assert_eq!(first_match(&values, |value| *value == 0), Some(&0));
/// assert_eq!(first_match(&values, |value| *value > 10), None);
/// ```
#[must_use]
pub fn first_match<T, P>(sequence: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().find(|element| predicate(*element))
}

/// Returns a reference to the last element satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::last_match;
///
/// let values = vec![(1, "a"), (2, "b"), (1, "c")];
/// assert_eq!(last_match(&values, |(key, _)| *key == 1), Some(&(1, "c")));
/// ```
#[must_use]
pub fn last_match<T, P>(sequence: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().rev().find(|element| predicate(*element))
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Stops at the first match. Always `false` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::any_match;
///
/// let fibonacci = [1, 1, 2, 3, 5, 8, 13];
/// assert!(any_match(&fibonacci, |value| *value > 10));
/// assert!(!any_match(&fibonacci, |value| *value < 0));
/// ```
#[must_use]
pub fn any_match<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().any(predicate)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Stops at the first failure. Always `true` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::all_match;
///
/// assert!(all_match(&[1, 2, 3], |value| *value > 0));
/// assert!(!all_match(&[-1, 0, 1, 2, 3], |value| *value > 0));
/// assert!(all_match(&[] as &[i32], |_| false));
/// ```
#[must_use]
pub fn all_match<T, P>(sequence: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().all(predicate)
}

// =============================================================================
// Membership
// =============================================================================

/// Index returned by [`index_of`] when the value is absent.
pub const NOT_FOUND: isize = -1;

/// Returns `true` if some element equals `value`.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::contains;
///
/// assert!(contains(&[1, 2, 3, 4], &3));
///
/// let days = vec!["a".to_string(), "b".to_string(), "test".to_string()];
/// assert!(!contains(&days, "wednesday"));
/// ```
#[must_use]
pub fn contains<T, Q>(sequence: &[T], value: &Q) -> bool
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    sequence.iter().any(|element| element == value)
}

/// Returns the lowest index holding an element equal to `value`, or
/// [`NOT_FOUND`].
///
/// Slices of zero-sized elements can be longer than `isize::MAX`; a match
/// beyond that index is reported as [`NOT_FOUND`]. [`position_of`] has no
/// such limit.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::{index_of, NOT_FOUND};
///
/// assert_eq!(index_of(&[1, 2, 3, 4, 5], &3), 2);
/// assert_eq!(index_of(&[1, 2, 3, 4, 5], &6), NOT_FOUND);
/// ```
#[must_use]
pub fn index_of<T, Q>(sequence: &[T], value: &Q) -> isize
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    position_of(sequence, value)
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(NOT_FOUND)
}

/// Returns the lowest index holding an element equal to `value`.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::position_of;
///
/// assert_eq!(position_of(&["x", "y", "y"], &"y"), Some(1));
/// assert_eq!(position_of(&["x", "y"], &"z"), None);
/// ```
#[must_use]
pub fn position_of<T, Q>(sequence: &[T], value: &Q) -> Option<usize>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    sequence.iter().position(|element| element == value)
}
