//! Method-call syntax for the sequence operations.

use std::hash::Hash;

use crate::hash::{Mapping, Set};

/// Exposes the sequence operations as methods on slices and, through
/// deref, on `Vec`.
///
/// Every method delegates to the free function of the same name in
/// [`crate::sequence`]. There is no `contains` method: `[T]::contains`
/// already does the same thing.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::sequence::SequenceExt;
///
/// let values = vec![1, 2, 3, 4, 5, 6];
///
/// let small = values.filter(|value| *value <= 3);
/// assert_eq!(small, vec![1, 2, 3]);
///
/// let doubled = small.transform(|value| value * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// assert_eq!(values.index_of(&4), 3);
/// assert!(values.all_match(|value| *value > 0));
/// ```
pub trait SequenceExt<T> {
    /// See [`filter`](crate::sequence::filter).
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// See [`try_filter`](crate::sequence::try_filter).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// See [`find_first`](crate::sequence::find_first).
    fn find_first<P>(&self, predicate: P) -> T
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool;

    /// See [`find_last`](crate::sequence::find_last).
    fn find_last<P>(&self, predicate: P) -> T
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool;

    /// See [`first_match`](crate::sequence::first_match).
    fn first_match<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// See [`last_match`](crate::sequence::last_match).
    fn last_match<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// See [`any_match`](crate::sequence::any_match).
    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`all_match`](crate::sequence::all_match).
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// See [`transform`](crate::sequence::transform).
    fn transform<U, F>(&self, function: F) -> Vec<U>
    where
        F: FnMut(&T) -> U;

    /// See [`try_transform`](crate::sequence::try_transform).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    fn try_transform<U, E, F>(&self, function: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>;

    /// See [`index_of`](crate::sequence::index_of).
    fn index_of<Q>(&self, value: &Q) -> isize
    where
        T: PartialEq<Q>,
        Q: ?Sized;

    /// See [`position_of`](crate::sequence::position_of).
    fn position_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
        Q: ?Sized;

    /// See [`group_by`](crate::sequence::group_by).
    fn group_by<K, V, KS, VS>(&self, key_selector: KS, value_selector: VS) -> Mapping<K, Vec<V>>
    where
        K: Eq + Hash,
        KS: FnMut(&T) -> K,
        VS: FnMut(&T) -> V;

    /// See [`to_set`](crate::sequence::to_set).
    fn to_set<K, KS>(&self, key_selector: KS) -> Set<K>
    where
        K: Eq + Hash,
        KS: FnMut(&T) -> K;

    /// See [`to_map`](crate::sequence::to_map).
    fn to_map<K, V, KS, VS>(&self, key_selector: KS, value_selector: VS) -> Mapping<K, V>
    where
        K: Eq + Hash,
        KS: FnMut(&T) -> K,
        VS: FnMut(&T) -> V;
}

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        super::filter(self, predicate)
    }

    #[inline]
    fn try_filter<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>,
    {
        super::try_filter(self, predicate)
    }

    #[inline]
    fn find_first<P>(&self, predicate: P) -> T
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool,
    {
        super::find_first(self, predicate)
    }

    #[inline]
    fn find_last<P>(&self, predicate: P) -> T
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool,
    {
        super::find_last(self, predicate)
    }

    #[inline]
    fn first_match<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        super::first_match(self, predicate)
    }

    #[inline]
    fn last_match<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        super::last_match(self, predicate)
    }

    #[inline]
    fn any_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        super::any_match(self, predicate)
    }

    #[inline]
    fn all_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        super::all_match(self, predicate)
    }

    #[inline]
    fn transform<U, F>(&self, function: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        super::transform(self, function)
    }

    #[inline]
    fn try_transform<U, E, F>(&self, function: F) -> Result<Vec<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        super::try_transform(self, function)
    }

    #[inline]
    fn index_of<Q>(&self, value: &Q) -> isize
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        super::index_of(self, value)
    }

    #[inline]
    fn position_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        super::position_of(self, value)
    }

    #[inline]
    fn group_by<K, V, KS, VS>(&self, key_selector: KS, value_selector: VS) -> Mapping<K, Vec<V>>
    where
        K: Eq + Hash,
        KS: FnMut(&T) -> K,
        VS: FnMut(&T) -> V,
    {
        super::group_by(self, key_selector, value_selector)
    }

    #[inline]
    fn to_set<K, KS>(&self, key_selector: KS) -> Set<K>
    where
        K: Eq + Hash,
        KS: FnMut(&T) -> K,
    {
        super::to_set(self, key_selector)
    }

    #[inline]
    fn to_map<K, V, KS, VS>(&self, key_selector: KS, value_selector: VS) -> Mapping<K, V>
    where
        K: Eq + Hash,
        KS: FnMut(&T) -> K,
        VS: FnMut(&T) -> V,
    {
        super::to_map(self, key_selector, value_selector)
    }
}
