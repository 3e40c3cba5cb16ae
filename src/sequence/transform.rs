//! Element-wise transformation of slices.

/// Applies `function` to every element, returning the results in the same
/// order.
///
/// The output has the same length as the input and
/// `transform(sequence, function)[i] == function(&sequence[i])`.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::transform;
///
/// assert_eq!(transform(&[1, 2, 3, 4], |value| 2 * value), vec![2, 4, 6, 8]);
/// assert_eq!(transform(&["test", "a", "golang"], |word| word.len()), vec![4, 1, 6]);
/// ```
#[must_use]
pub fn transform<T, U, F>(sequence: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sequence.iter().map(function).collect()
}

/// Like [`transform`], but with a function that can fail.
///
/// Stops at the first `Err` and returns it unchanged; no partial output is
/// kept.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::try_transform;
///
/// let parsed = try_transform(&["1", "2", "3"], |input| input.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let failed = try_transform(&["1", "x", "3"], |input| input.parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_transform<T, U, E, F>(sequence: &[T], mut function: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut result = Vec::with_capacity(sequence.len());
    for element in sequence {
        result.push(function(element)?);
    }
    Ok(result)
}
