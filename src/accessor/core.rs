//! The core [`Accessor`] trait.
//!
//! An Accessor focuses on zero or more values within a structure and knows
//! how to extract them (`query`) and how to rebuild the structure with the
//! focused values transformed (`modify`). It generalizes a field lens (which
//! focuses exactly one value) and a traversal (which focuses zero-to-many).
//!
//! # Laws
//!
//! 1. **Focus Agreement**: `modify` transforms exactly the values `query`
//!    returns, once per element.
//! 2. **Identity Modify**: `accessor.modify(source.clone(), |x| x) == source`
//!
//! See the [module documentation](crate::accessor) for the composition laws.

use crate::accessor::compose::ComposedAccessor;

/// A composable query/modify pair focused on zero or more values of type `A`
/// within a structure of type `S`.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused values)
///
/// # Multiplicity
///
/// `query` returning a `Vec` models multiplicity. A direct field focus
/// returns exactly one value; a filter or traversal focus returns
/// zero-to-many. Absence ("no match") is an empty result, never an error.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, index};
///
/// let second = index::<i32>(1);
/// assert_eq!(second.query(&vec![1, 2, 3]), vec![2]);
/// assert_eq!(second.modify(vec![1, 2, 3], |x| x * 10), vec![1, 20, 3]);
/// ```
pub trait Accessor<S, A> {
    /// Extracts all focused values from the source.
    ///
    /// Returns owned clones of the focused values. An accessor whose focus
    /// matches nothing returns an empty vector.
    fn query(&self, source: &S) -> Vec<A>;

    /// Returns a new structure with every focused value transformed.
    ///
    /// The source is consumed; non-focused data is carried over unchanged.
    /// The transform is applied to exactly the values `query` would return,
    /// once per element. If the focus matches nothing, the transform is
    /// never invoked and the source is returned as-is.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Extracts the first focused value, if any.
    ///
    /// Intended for accessors expected to be single-valued; on an empty
    /// traversal this returns `None` rather than panicking.
    ///
    /// # Example
    ///
    /// ```
    /// use fun_land::accessor::{Accessor, index};
    ///
    /// assert_eq!(index::<i32>(0).get(&vec![7]), Some(7));
    /// assert_eq!(index::<i32>(0).get(&vec![]), None);
    /// ```
    fn get(&self, source: &S) -> Option<A> {
        self.query(source).into_iter().next()
    }

    /// Replaces every focused value with the given value.
    ///
    /// For a multi-valued (traversal) accessor this sets every focused
    /// element to the same value.
    ///
    /// # Example
    ///
    /// ```
    /// use fun_land::accessor::{Accessor, all};
    ///
    /// assert_eq!(all::<i32>().set(vec![1, 2, 3], 0), vec![0, 0, 0]);
    /// ```
    fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Returns the number of focused values.
    fn length(&self, source: &S) -> usize {
        self.query(source).len()
    }

    /// Tests if any focused value satisfies a predicate.
    ///
    /// Returns `false` if there are no focused values.
    fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.query(source).iter().any(predicate)
    }

    /// Folds over all focused values.
    ///
    /// # Example
    ///
    /// ```
    /// use fun_land::accessor::{Accessor, all};
    ///
    /// let sum = all::<i32>().fold(&vec![1, 2, 3], 0, |acc, x| acc + x);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.query(source).iter().fold(initial, function)
    }

    /// Composes this accessor with another to focus deeper into the
    /// structure.
    ///
    /// The composed query flat-maps the inner query over the outer results;
    /// the composed modify lifts the inner transform through the outer one.
    /// Composition is associative and [`unit`](crate::accessor::unit) is its
    /// identity. The [`comp!`](crate::comp) macro chains 2 to 8 accessors.
    ///
    /// # Example
    ///
    /// ```
    /// use fun_land::accessor::{Accessor, all, filter};
    ///
    /// let odd = all::<Vec<i32>>().compose(filter(|x: &i32| x % 2 == 1));
    /// let data = vec![vec![1, 2], vec![3, 4]];
    /// assert_eq!(odd.query(&data), vec![1, 3]);
    /// ```
    fn compose<B, T>(self, other: T) -> ComposedAccessor<Self, T, A>
    where
        Self: Sized,
        T: Accessor<A, B>,
    {
        ComposedAccessor::new(self, other)
    }
}
