//! Identity-shaped accessors.
//!
//! [`unit`] is the no-op accessor and the identity of composition, making
//! accessors a monoid under [`comp!`](crate::comp). [`read_only`] shares its
//! query but makes `modify` a no-op, which blocks writes through any chain it
//! participates in while still allowing reads.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::{Accessor, read_only, unit};
//! use fun_land::{comp, prop};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { id: u32 }
//!
//! let user = User { id: 1 };
//! assert_eq!(comp!(prop!(User, id), unit()).query(&user), vec![1]);
//!
//! // read_only blocks the write but not the read
//! let guarded = comp!(prop!(User, id), read_only());
//! assert_eq!(guarded.query(&user), vec![1]);
//! assert_eq!(guarded.modify(user, |x| x + 1).id, 1);
//! ```

use std::marker::PhantomData;

use static_assertions::assert_impl_all;

use crate::accessor::Accessor;

/// The identity accessor: focuses the whole structure as a single value.
///
/// `query` yields the structure itself; `modify` applies the transform
/// directly. Acts as the composition identity (monoid unit) for
/// [`comp!`](crate::comp).
pub struct IdentityAccessor<A> {
    _marker: PhantomData<A>,
}

/// Creates the identity accessor.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, unit};
///
/// assert_eq!(unit::<i32>().query(&1), vec![1]);
/// assert_eq!(unit::<i32>().modify(2, |x| x + 1), 3);
/// ```
#[must_use]
pub const fn unit<A>() -> IdentityAccessor<A> {
    IdentityAccessor {
        _marker: PhantomData,
    }
}

impl<A> Default for IdentityAccessor<A> {
    fn default() -> Self {
        unit()
    }
}

impl<A> Clone for IdentityAccessor<A> {
    fn clone(&self) -> Self {
        unit()
    }
}

impl<A> std::fmt::Debug for IdentityAccessor<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IdentityAccessor").finish()
    }
}

impl<A: Clone> Accessor<A, A> for IdentityAccessor<A> {
    fn query(&self, source: &A) -> Vec<A> {
        vec![source.clone()]
    }

    fn modify<F>(&self, source: A, mut function: F) -> A
    where
        F: FnMut(A) -> A,
    {
        function(source)
    }
}

/// Like [`IdentityAccessor`] for queries, but `modify` is a no-op.
///
/// Composing a chain through a `ReadOnlyAccessor` blocks writes anywhere in
/// the chain while leaving reads intact.
pub struct ReadOnlyAccessor<A> {
    _marker: PhantomData<A>,
}

/// Creates a read-only accessor.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, read_only};
///
/// assert_eq!(read_only::<i32>().query(&1), vec![1]);
/// assert_eq!(read_only::<i32>().modify(1, |x| x + 1), 1);
/// ```
#[must_use]
pub const fn read_only<A>() -> ReadOnlyAccessor<A> {
    ReadOnlyAccessor {
        _marker: PhantomData,
    }
}

impl<A> Default for ReadOnlyAccessor<A> {
    fn default() -> Self {
        read_only()
    }
}

impl<A> Clone for ReadOnlyAccessor<A> {
    fn clone(&self) -> Self {
        read_only()
    }
}

impl<A> std::fmt::Debug for ReadOnlyAccessor<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("ReadOnlyAccessor").finish()
    }
}

impl<A: Clone> Accessor<A, A> for ReadOnlyAccessor<A> {
    fn query(&self, source: &A) -> Vec<A> {
        vec![source.clone()]
    }

    fn modify<F>(&self, source: A, _function: F) -> A
    where
        F: FnMut(A) -> A,
    {
        source
    }
}

// Accessors carry no identity or mutable state and must stay shareable.
assert_impl_all!(IdentityAccessor<i32>: Clone);
assert_impl_all!(ReadOnlyAccessor<i32>: Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{comp, prop};

    #[derive(Clone, PartialEq, Debug)]
    struct User {
        id: u32,
    }

    #[test]
    fn test_unit_query_wraps_value() {
        assert_eq!(unit::<i32>().query(&1), vec![1]);
    }

    #[test]
    fn test_unit_mod_applies_transform() {
        assert_eq!(unit::<i32>().modify(2, |x| x + 1), 3);
    }

    #[test]
    fn test_unit_is_left_and_right_identity() {
        let user = User { id: 1 };
        assert_eq!(comp!(unit::<User>(), prop!(User, id)).query(&user), vec![1]);
        assert_eq!(comp!(prop!(User, id), unit()).query(&user), vec![1]);

        let left = comp!(unit::<User>(), prop!(User, id)).modify(user.clone(), |x| x + 1);
        let right = comp!(prop!(User, id), unit()).modify(user, |x| x + 1);
        assert_eq!(left, right);
        assert_eq!(left.id, 2);
    }

    #[test]
    fn test_read_only_mod_is_noop() {
        assert_eq!(read_only::<i32>().modify(2, |x| x + 1), 2);
    }

    #[test]
    fn test_read_only_blocks_writes_through_chain() {
        let user = User { id: 1 };
        let guarded = comp!(read_only::<User>(), prop!(User, id), unit::<u32>());
        assert_eq!(guarded.query(&user), vec![1]);
        assert_eq!(guarded.modify(user, |x| x + 1), User { id: 1 });
    }
}
