//! Accessor composition.
//!
//! Composing `acc1: Accessor<A, B>` with `acc2: Accessor<B, C>` yields an
//! `Accessor<A, C>`:
//!
//! - `query` flat-maps `acc2.query` over the values `acc1.query` produces,
//!   concatenating the results.
//! - `modify` lifts the inner transform through the outer accessor, so each
//!   intermediate value is rebuilt in place.
//!
//! Composition is associative, and [`unit`](crate::accessor::unit) is its
//! identity, making accessors a monoid under composition.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::{Accessor, all};
//! use fun_land::{comp, prop};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Team { scores: Vec<i32> }
//!
//! let every_score = comp!(prop!(Team, scores), all());
//! let team = Team { scores: vec![1, 2, 3] };
//! assert_eq!(every_score.query(&team), vec![1, 2, 3]);
//! assert_eq!(every_score.modify(team, |x| x * 2).scores, vec![2, 4, 6]);
//! ```

use std::marker::PhantomData;

use crate::accessor::Accessor;

/// An accessor composed of two accessors.
///
/// Focuses through `first` into an intermediate structure, then through
/// `second` into the final values. Built by [`Accessor::compose`] or the
/// [`comp!`](crate::comp) macro.
///
/// # Type Parameters
///
/// - `A1`: The type of the outer accessor
/// - `A2`: The type of the inner accessor
/// - `Mid`: The intermediate type (target of `A1`, source of `A2`)
pub struct ComposedAccessor<A1, A2, Mid> {
    first: A1,
    second: A2,
    _marker: PhantomData<Mid>,
}

impl<A1, A2, Mid> ComposedAccessor<A1, A2, Mid> {
    /// Creates a new composed accessor from an outer and an inner accessor.
    #[must_use]
    pub const fn new(first: A1, second: A2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<A1: Clone, A2: Clone, Mid> Clone for ComposedAccessor<A1, A2, Mid> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<A1: std::fmt::Debug, A2: std::fmt::Debug, Mid> std::fmt::Debug
    for ComposedAccessor<A1, A2, Mid>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedAccessor")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, Mid, A, A1, A2> Accessor<S, A> for ComposedAccessor<A1, A2, Mid>
where
    A1: Accessor<S, Mid>,
    A2: Accessor<Mid, A>,
{
    fn query(&self, source: &S) -> Vec<A> {
        self.first
            .query(source)
            .iter()
            .flat_map(|intermediate| self.second.query(intermediate))
            .collect()
    }

    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.first.modify(source, |intermediate| {
            self.second.modify(intermediate, &mut function)
        })
    }
}

/// Composes 2 to 8 accessors into one, left to right.
///
/// Expands to nested [`Accessor::compose`](crate::accessor::Accessor::compose)
/// calls; since composition is associative, longer chains can always be built
/// by composing twice.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, all, filter};
/// use fun_land::{comp, prop};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { connections: Vec<i32> }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Friends { friends: Vec<User> }
///
/// let odd_connections = comp!(
///     prop!(Friends, friends),
///     all(),
///     prop!(User, connections),
///     filter(|x: &i32| x % 2 == 1),
/// );
///
/// let friends = Friends {
///     friends: vec![
///         User { connections: vec![1, 2] },
///         User { connections: vec![3, 4] },
///     ],
/// };
/// assert_eq!(odd_connections.query(&friends), vec![1, 3]);
/// ```
#[macro_export]
macro_rules! comp {
    ($first:expr, $second:expr $(,)?) => {
        $crate::accessor::Accessor::compose($first, $second)
    };
    ($first:expr, $second:expr, $($rest:expr),+ $(,)?) => {
        $crate::comp!($crate::accessor::Accessor::compose($first, $second), $($rest),+)
    };
}
