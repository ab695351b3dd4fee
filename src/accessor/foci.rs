//! Fluent accessor builder.
//!
//! [`Foci`] wraps an accessor in a chainable interface: each step composes a
//! further accessor and returns a fresh wrapper, never mutating the original.
//! [`acc`] starts a chain at the identity accessor.
//!
//! There is no string-keyed `prop` step in Rust; field focusing is spelled
//! `.focus(prop!(Type, field))`, which keeps the field name compile-checked.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::acc;
//! use fun_land::prop;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, connections: Vec<i32> }
//!
//! let bob = User { name: "bob".to_string(), connections: vec![1, 2] };
//!
//! let second = acc::<User>().focus(prop!(User, connections)).at(1);
//! assert_eq!(second.get(&bob), Some(2));
//!
//! let bumped = second.modify(bob, |x| x + 1);
//! assert_eq!(bumped.connections, vec![1, 3]);
//! ```

use std::marker::PhantomData;

use crate::accessor::Accessor;
use crate::accessor::compose::ComposedAccessor;
use crate::accessor::identity::{IdentityAccessor, unit};
use crate::accessor::option::OptionAccessor;
use crate::accessor::sequence::{EachAccessor, IndexAccessor, all, index};

/// A chainable wrapper around an accessor.
///
/// Every builder method consumes the wrapper and returns a new one over the
/// newly composed accessor. `Foci` itself implements [`Accessor`], so a
/// finished chain can be passed anywhere an accessor is expected.
///
/// # Type Parameters
///
/// - `S`: The source type the chain starts from
/// - `A`: The currently focused type
/// - `Acc`: The underlying accessor type
pub struct Foci<S, A, Acc> {
    accessor: Acc,
    _marker: PhantomData<(S, A)>,
}

/// Starts a fluent accessor chain at the identity accessor.
///
/// # Example
///
/// ```
/// use fun_land::accessor::acc;
///
/// let first = acc::<Vec<i32>>().at(0);
/// assert_eq!(first.get(&vec![7, 8]), Some(7));
/// ```
#[must_use]
pub const fn acc<S: Clone>() -> Foci<S, S, IdentityAccessor<S>> {
    Foci {
        accessor: unit(),
        _marker: PhantomData,
    }
}

impl<S, A, Acc> Foci<S, A, Acc>
where
    Acc: Accessor<S, A>,
{
    /// Wraps an existing accessor in the fluent interface.
    #[must_use]
    pub const fn new(accessor: Acc) -> Self {
        Self {
            accessor,
            _marker: PhantomData,
        }
    }

    /// Focuses deeper using the passed accessor.
    pub fn focus<B, T>(self, other: T) -> Foci<S, B, ComposedAccessor<Acc, T, A>>
    where
        T: Accessor<A, B>,
    {
        Foci::new(self.accessor.compose(other))
    }

    /// Extracts all focused values.
    pub fn query(&self, source: &S) -> Vec<A> {
        self.accessor.query(source)
    }

    /// Extracts the first focused value, if any.
    pub fn get(&self, source: &S) -> Option<A> {
        self.accessor.get(source)
    }

    /// Replaces every focused value.
    pub fn set(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.accessor.set(source, value)
    }

    /// Transforms every focused value.
    pub fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.accessor.modify(source, function)
    }

    /// Unwraps the underlying accessor.
    pub fn into_accessor(self) -> Acc {
        self.accessor
    }
}

impl<S, B, Acc> Foci<S, Vec<B>, Acc>
where
    Acc: Accessor<S, Vec<B>>,
    B: Clone,
{
    /// Focuses the element at the passed array index.
    pub fn at(self, i: usize) -> Foci<S, B, ComposedAccessor<Acc, IndexAccessor<B>, Vec<B>>> {
        self.focus(index(i))
    }

    /// Focuses all child array items.
    pub fn all(self) -> Foci<S, B, ComposedAccessor<Acc, EachAccessor<B>, Vec<B>>> {
        self.focus(all())
    }
}

impl<S, B, Acc> Foci<S, Option<B>, Acc>
where
    Acc: Accessor<S, Option<B>>,
    B: Clone,
{
    /// Focuses the value inside an `Option`, short-circuiting on `None`.
    pub fn optional(
        self,
    ) -> Foci<S, B, ComposedAccessor<Acc, OptionAccessor<B>, Option<B>>> {
        self.focus(crate::accessor::optional())
    }
}

impl<S, A, Acc> Accessor<S, A> for Foci<S, A, Acc>
where
    Acc: Accessor<S, A>,
{
    fn query(&self, source: &S) -> Vec<A> {
        self.accessor.query(source)
    }

    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.accessor.modify(source, function)
    }
}

impl<S, A, Acc: Clone> Clone for Foci<S, A, Acc> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Acc: std::fmt::Debug> std::fmt::Debug for Foci<S, A, Acc> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Foci")
            .field("accessor", &self.accessor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::filter;
    use crate::{comp, prop};

    #[derive(Clone, PartialEq, Debug)]
    struct User {
        name: String,
        id: u32,
        cool: bool,
        connections: Vec<i32>,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Friend {
        user: User,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Friends {
        friends: Vec<Friend>,
    }

    fn user(name: &str, id: u32, cool: bool, connections: Vec<i32>) -> Friend {
        Friend {
            user: User {
                name: name.to_string(),
                id,
                cool,
                connections,
            },
        }
    }

    fn my_friends() -> Friends {
        Friends {
            friends: vec![
                user("bob", 1, false, vec![1, 2]),
                user("Shari", 0, false, vec![3, 4]),
                user("Mark", 2, true, vec![3, 4]),
            ],
        }
    }

    #[test]
    fn test_create_from_accessor() {
        let first_connection = Foci::new(prop!(User, connections)).at(0);
        let bob = user("bob", 1, false, vec![1, 2]).user;
        assert_eq!(first_connection.get(&bob), Some(1));
    }

    #[test]
    fn test_focus_queries_composed_accessor() {
        let id = acc::<Friend>().focus(comp!(prop!(Friend, user), prop!(User, id)));
        assert_eq!(id.query(&user("bob", 1, false, vec![])), vec![1]);
    }

    #[test]
    fn test_get_returns_first_of_traversal() {
        let cool_names = acc::<Friends>()
            .focus(prop!(Friends, friends))
            .focus(filter(|f: &Friend| f.user.cool))
            .focus(prop!(Friend, user))
            .focus(prop!(User, name));
        assert_eq!(cool_names.get(&my_friends()), Some("Mark".to_string()));
    }

    #[test]
    fn test_get_returns_none_when_chain_matches_nothing() {
        let cool = acc::<Friends>()
            .focus(prop!(Friends, friends))
            .focus(filter(|f: &Friend| f.user.cool));
        let nobody_cool = Friends {
            friends: vec![user("bob", 1, false, vec![])],
        };
        assert_eq!(cool.get(&nobody_cool), None);
    }

    #[test]
    fn test_at_mods_index() {
        let second = acc::<User>().focus(prop!(User, connections)).at(1);
        let bob = user("bob", 1, false, vec![1, 2]).user;
        let bumped = second.modify(bob.clone(), |x| x + 1);
        assert_eq!(bumped.connections[1], bob.connections[1] + 1);
    }

    #[test]
    fn test_make_all_friends_cool() {
        let cooled = acc::<Friends>()
            .focus(prop!(Friends, friends))
            .all()
            .focus(prop!(Friend, user))
            .focus(prop!(User, cool))
            .set(my_friends(), true);
        let cool_ids = acc::<Friends>()
            .focus(prop!(Friends, friends))
            .focus(filter(|f: &Friend| f.user.cool))
            .focus(prop!(Friend, user))
            .focus(prop!(User, id));
        assert_eq!(cool_ids.query(&cooled), vec![1, 0, 2]);
    }

    #[test]
    fn test_foci_is_an_accessor() {
        let names = acc::<Friends>()
            .focus(prop!(Friends, friends))
            .all()
            .focus(prop!(Friend, user))
            .focus(prop!(User, name));
        // Passing the finished chain where an accessor is expected
        let upper = Accessor::modify(&names, my_friends(), |n| n.to_uppercase());
        assert_eq!(
            names.query(&upper),
            vec!["BOB".to_string(), "SHARI".to_string(), "MARK".to_string()]
        );
    }
}
