//! Positional and predicate accessors over `Vec`.
//!
//! - [`index`]: one element at a position (out-of-bounds focuses nothing)
//! - [`all`]: every element (the canonical traversal)
//! - [`filter`]: elements matching a predicate
//! - [`before`] / [`after`]: elements strictly below / above an index
//!
//! All of these leave non-focused elements untouched when modifying, and
//! represent "no match" as an empty focus rather than an error.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::{Accessor, all, filter, index};
//!
//! let numbers = vec![1, 2, 3, 4];
//! assert_eq!(index::<i32>(1).query(&numbers), vec![2]);
//! assert_eq!(all::<i32>().query(&numbers), vec![1, 2, 3, 4]);
//! assert_eq!(filter(|x: &i32| x % 2 == 0).query(&numbers), vec![2, 4]);
//! ```

use std::marker::PhantomData;

use crate::accessor::Accessor;

// =============================================================================
// IndexAccessor - one element at a position
// =============================================================================

/// An accessor that focuses the element at a fixed position of a `Vec`.
///
/// Out-of-bounds positions focus nothing: `query` is empty and `modify` is a
/// no-op. No bounds panic, ever.
pub struct IndexAccessor<A> {
    index: usize,
    _marker: PhantomData<A>,
}

/// Creates an accessor focusing array position `i`.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, index};
///
/// assert_eq!(index::<i32>(1).query(&vec![1, 2]), vec![2]);
/// assert_eq!(index::<i32>(9).query(&vec![1, 2]), Vec::<i32>::new());
/// assert_eq!(index::<i32>(1).modify(vec![1, 2], |x| x + 1), vec![1, 3]);
/// ```
#[must_use]
pub const fn index<A>(i: usize) -> IndexAccessor<A> {
    IndexAccessor {
        index: i,
        _marker: PhantomData,
    }
}

impl<A> Clone for IndexAccessor<A> {
    fn clone(&self) -> Self {
        index(self.index)
    }
}

impl<A> std::fmt::Debug for IndexAccessor<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IndexAccessor")
            .field("index", &self.index)
            .finish()
    }
}

impl<A: Clone> Accessor<Vec<A>, A> for IndexAccessor<A> {
    fn query(&self, source: &Vec<A>) -> Vec<A> {
        source.get(self.index).cloned().into_iter().collect()
    }

    fn modify<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source
            .into_iter()
            .enumerate()
            .map(|(position, element)| {
                if position == self.index {
                    function(element)
                } else {
                    element
                }
            })
            .collect()
    }
}

// =============================================================================
// EachAccessor - every element
// =============================================================================

/// An accessor that focuses every element of a `Vec` (a traversal).
pub struct EachAccessor<A> {
    _marker: PhantomData<A>,
}

/// Creates an accessor focusing all items of an array.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, all};
///
/// assert_eq!(all::<i32>().query(&vec![1, 2]), vec![1, 2]);
/// assert_eq!(all::<i32>().modify(vec![1, 2], |x| x * 2), vec![2, 4]);
/// ```
#[must_use]
pub const fn all<A>() -> EachAccessor<A> {
    EachAccessor {
        _marker: PhantomData,
    }
}

impl<A> Default for EachAccessor<A> {
    fn default() -> Self {
        all()
    }
}

impl<A> Clone for EachAccessor<A> {
    fn clone(&self) -> Self {
        all()
    }
}

impl<A> std::fmt::Debug for EachAccessor<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("EachAccessor").finish()
    }
}

impl<A: Clone> Accessor<Vec<A>, A> for EachAccessor<A> {
    fn query(&self, source: &Vec<A>) -> Vec<A> {
        source.clone()
    }

    fn modify<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }
}

// =============================================================================
// FilterAccessor - elements matching a predicate
// =============================================================================

/// An accessor that focuses the elements of a `Vec` matching a predicate.
///
/// When modifying, the predicate is evaluated against the pre-transform
/// element; non-matching elements pass through untouched.
pub struct FilterAccessor<A, P>
where
    P: Fn(&A) -> bool,
{
    predicate: P,
    _marker: PhantomData<A>,
}

/// Creates an accessor targeting items that match the passed predicate.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, filter};
///
/// let odd = filter(|x: &i32| x % 2 == 1);
/// assert_eq!(odd.query(&vec![1, 2, 3]), vec![1, 3]);
/// assert_eq!(odd.modify(vec![1, 2, 3], |x| x * 10), vec![10, 2, 30]);
/// ```
#[must_use]
pub const fn filter<A, P>(predicate: P) -> FilterAccessor<A, P>
where
    P: Fn(&A) -> bool,
{
    FilterAccessor {
        predicate,
        _marker: PhantomData,
    }
}

impl<A, P> Clone for FilterAccessor<A, P>
where
    P: Fn(&A) -> bool + Clone,
{
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A, P> std::fmt::Debug for FilterAccessor<A, P>
where
    P: Fn(&A) -> bool,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FilterAccessor")
            .finish_non_exhaustive()
    }
}

impl<A: Clone, P> Accessor<Vec<A>, A> for FilterAccessor<A, P>
where
    P: Fn(&A) -> bool,
{
    fn query(&self, source: &Vec<A>) -> Vec<A> {
        source
            .iter()
            .filter(|element| (self.predicate)(element))
            .cloned()
            .collect()
    }

    fn modify<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source
            .into_iter()
            .map(|element| {
                if (self.predicate)(&element) {
                    function(element)
                } else {
                    element
                }
            })
            .collect()
    }
}

// =============================================================================
// BeforeAccessor / AfterAccessor - elements strictly below / above an index
// =============================================================================

/// An accessor that focuses the elements whose index is strictly less than a
/// bound.
pub struct BeforeAccessor<A> {
    bound: usize,
    _marker: PhantomData<A>,
}

/// Creates an accessor targeting items before the passed index.
///
/// `before(0)` focuses nothing.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, before};
///
/// assert_eq!(before::<i32>(2).query(&vec![0, 1, 2, 3]), vec![0, 1]);
/// assert_eq!(before::<i32>(0).query(&vec![0, 1]), Vec::<i32>::new());
/// ```
#[must_use]
pub const fn before<A>(i: usize) -> BeforeAccessor<A> {
    BeforeAccessor {
        bound: i,
        _marker: PhantomData,
    }
}

impl<A> Clone for BeforeAccessor<A> {
    fn clone(&self) -> Self {
        before(self.bound)
    }
}

impl<A> std::fmt::Debug for BeforeAccessor<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BeforeAccessor")
            .field("bound", &self.bound)
            .finish()
    }
}

impl<A: Clone> Accessor<Vec<A>, A> for BeforeAccessor<A> {
    fn query(&self, source: &Vec<A>) -> Vec<A> {
        source.iter().take(self.bound).cloned().collect()
    }

    fn modify<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source
            .into_iter()
            .enumerate()
            .map(|(position, element)| {
                if position < self.bound {
                    function(element)
                } else {
                    element
                }
            })
            .collect()
    }
}

/// An accessor that focuses the elements whose index is strictly greater
/// than a bound.
pub struct AfterAccessor<A> {
    bound: usize,
    _marker: PhantomData<A>,
}

/// Creates an accessor targeting items after the passed index.
///
/// `after(len - 1)` and beyond focuses nothing.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, after};
///
/// assert_eq!(after::<i32>(1).query(&vec![0, 1, 2, 3]), vec![2, 3]);
/// assert_eq!(after::<i32>(3).query(&vec![0, 1, 2, 3]), Vec::<i32>::new());
/// ```
#[must_use]
pub const fn after<A>(i: usize) -> AfterAccessor<A> {
    AfterAccessor {
        bound: i,
        _marker: PhantomData,
    }
}

impl<A> Clone for AfterAccessor<A> {
    fn clone(&self) -> Self {
        after(self.bound)
    }
}

impl<A> std::fmt::Debug for AfterAccessor<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AfterAccessor")
            .field("bound", &self.bound)
            .finish()
    }
}

impl<A: Clone> Accessor<Vec<A>, A> for AfterAccessor<A> {
    fn query(&self, source: &Vec<A>) -> Vec<A> {
        source
            .iter()
            .enumerate()
            .filter(|(position, _)| *position > self.bound)
            .map(|(_, element)| element.clone())
            .collect()
    }

    fn modify<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source
            .into_iter()
            .enumerate()
            .map(|(position, element)| {
                if position > self.bound {
                    function(element)
                } else {
                    element
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_queries_item() {
        assert_eq!(index::<i32>(1).query(&vec![1, 2]), vec![2]);
    }

    #[test]
    fn test_index_out_of_bounds_focuses_nothing() {
        assert_eq!(index::<i32>(5).query(&vec![1, 2]), Vec::<i32>::new());
        let unchanged = index::<i32>(5).modify(vec![1, 2], |_| panic!("transform must not run"));
        assert_eq!(unchanged, vec![1, 2]);
    }

    #[test]
    fn test_index_mods_only_targeted_item() {
        assert_eq!(index::<i32>(1).modify(vec![1, 2, 3], |x| x + 1), vec![1, 3, 3]);
    }

    #[test]
    fn test_all_query_yields_every_element() {
        assert_eq!(all::<i32>().query(&vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_all_modifies_every_element() {
        assert_eq!(all::<i32>().modify(vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_query_matches_predicate() {
        let odd = filter(|x: &i32| x % 2 == 1);
        assert_eq!(odd.query(&vec![1, 2, 3, 4]), vec![1, 3]);
    }

    #[test]
    fn test_filter_mod_touches_only_matches() {
        let odd = filter(|x: &i32| x % 2 == 1);
        assert_eq!(odd.modify(vec![1, 2, 3, 4], |x| x + 10), vec![11, 2, 13, 4]);
    }

    #[test]
    fn test_filter_count_matches_query_length() {
        let odd = filter(|x: &i32| x % 2 == 1);
        let source = vec![1, 2, 3, 4, 5];
        let mut touched = 0;
        odd.modify(source.clone(), |x| {
            touched += 1;
            x
        });
        assert_eq!(touched, odd.query(&source).len());
    }

    #[test]
    fn test_before_bounds() {
        assert_eq!(before::<i32>(3).query(&vec![0, 1, 2, 3, 4, 5]), vec![0, 1, 2]);
        assert_eq!(before::<i32>(0).query(&vec![0, 1, 2]), Vec::<i32>::new());
    }

    #[test]
    fn test_before_modifies_prefix() {
        let bump = |a: i32| a + 2;
        assert_eq!(
            before::<i32>(3).modify(vec![0, 1, 2, 3, 4, 5], bump),
            vec![2, 3, 4, 3, 4, 5]
        );
        assert_eq!(
            before::<i32>(0).modify(vec![0, 1, 2], bump),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_after_bounds() {
        assert_eq!(after::<i32>(3).query(&vec![0, 1, 2, 3, 4, 5]), vec![4, 5]);
        assert_eq!(after::<i32>(5).query(&vec![0, 1, 2, 3, 4, 5]), Vec::<i32>::new());
    }

    #[test]
    fn test_after_modifies_suffix() {
        let bump = |a: i32| a + 2;
        assert_eq!(
            after::<i32>(3).modify(vec![0, 1, 2, 3, 4, 5], bump),
            vec![0, 1, 2, 3, 6, 7]
        );
        assert_eq!(
            after::<i32>(5).modify(vec![0, 1, 2, 3, 4, 5], bump),
            vec![0, 1, 2, 3, 4, 5]
        );
    }
}
