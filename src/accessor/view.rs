//! View accessors for alternate representations.
//!
//! [`viewed`] builds an isomorphism-shaped accessor from a forward and a
//! backward conversion, letting a chain read and modify data in a different
//! shape than it is stored (a number stored, a string displayed; a tuple
//! stored, a struct manipulated).
//!
//! # Law
//!
//! The caller must guarantee the round trip is semantically lossless for the
//! intended domain:
//!
//! ```text
//! from(to(x)) is equivalent to x
//! ```
//!
//! Not necessarily bit-identical, but no information the domain cares about
//! may be lost.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::{Accessor, viewed};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! // (i32, i32) stored, Point manipulated
//! let as_point = viewed(
//!     |&(x, y): &(i32, i32)| Point { x, y },
//!     |point: Point| (point.x, point.y),
//! );
//!
//! assert_eq!(as_point.query(&(1, 2)), vec![Point { x: 1, y: 2 }]);
//! let moved = as_point.modify((1, 2), |mut p| { p.x += 1; p });
//! assert_eq!(moved, (2, 2));
//! ```

use std::marker::PhantomData;

use crate::accessor::Accessor;

/// An isomorphism-shaped accessor viewing the source in an alternate shape.
///
/// # Type Parameters
///
/// - `S`: The stored type
/// - `V`: The view type
/// - `To`: The forward conversion type
/// - `From`: The backward conversion type
pub struct ViewAccessor<S, V, To, From>
where
    To: Fn(&S) -> V,
    From: Fn(V) -> S,
{
    to_view: To,
    from_view: From,
    _marker: PhantomData<(S, V)>,
}

/// Creates an accessor representing the source data in an alternate shape.
///
/// `query` yields the view of the source; `modify` converts to the view,
/// transforms it, and converts back.
#[must_use]
pub const fn viewed<S, V, To, From>(to_view: To, from_view: From) -> ViewAccessor<S, V, To, From>
where
    To: Fn(&S) -> V,
    From: Fn(V) -> S,
{
    ViewAccessor {
        to_view,
        from_view,
        _marker: PhantomData,
    }
}

impl<S, V, To, From> Accessor<S, V> for ViewAccessor<S, V, To, From>
where
    To: Fn(&S) -> V,
    From: Fn(V) -> S,
{
    fn query(&self, source: &S) -> Vec<V> {
        vec![(self.to_view)(source)]
    }

    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(V) -> V,
    {
        (self.from_view)(function((self.to_view)(&source)))
    }
}

impl<S, V, To, From> Clone for ViewAccessor<S, V, To, From>
where
    To: Fn(&S) -> V + Clone,
    From: Fn(V) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            to_view: self.to_view.clone(),
            from_view: self.from_view.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, V, To, From> std::fmt::Debug for ViewAccessor<S, V, To, From>
where
    To: Fn(&S) -> V,
    From: Fn(V) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("ViewAccessor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{acc, all};
    use crate::{comp, prop};

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    type Coord = (i32, i32);

    fn as_point() -> impl Accessor<Coord, Point> + Clone {
        viewed(
            |&(x, y): &Coord| Point { x, y },
            |point: Point| (point.x, point.y),
        )
    }

    #[test]
    fn test_query_into_viewed_structure() {
        let coords: Vec<Coord> = vec![(1, 2), (3, 4)];
        let points = comp!(all(), as_point());
        assert_eq!(
            points.query(&coords),
            vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]
        );
    }

    #[test]
    fn test_drilled_query_into_viewed_structure() {
        let coords: Vec<Coord> = vec![(1, 2), (3, 4)];
        let xs = acc::<Vec<Coord>>()
            .all()
            .focus(as_point())
            .focus(prop!(Point, x));
        assert_eq!(xs.query(&coords), vec![1, 3]);
    }

    #[test]
    fn test_mod_into_viewed_structure() {
        let coords: Vec<Coord> = vec![(1, 2), (3, 4)];
        let xs = comp!(all(), as_point(), prop!(Point, x));
        assert_eq!(xs.modify(coords, |x| x + 1), vec![(2, 2), (4, 4)]);
    }
}
