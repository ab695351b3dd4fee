//! Field accessors for focusing on struct fields.
//!
//! A [`FieldAccessor`] focuses on exactly one field of a structure through a
//! getter/setter closure pair. The [`prop!`](crate::prop) macro generates the
//! pair from a struct type and field name, so the field is named once and
//! checked at compile time.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::Accessor;
//! use fun_land::prop;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, id: u32 }
//!
//! let id = prop!(User, id);
//! let bob = User { name: "bob".to_string(), id: 1 };
//!
//! assert_eq!(id.query(&bob), vec![1]);
//! let updated = id.set(bob, 3);
//! assert_eq!(updated.id, 3);
//! assert_eq!(updated.name, "bob");
//! ```

use std::marker::PhantomData;

use crate::accessor::Accessor;

/// An accessor that focuses on a single field via getter and setter
/// functions.
///
/// The query is always a singleton: an `Option`-typed field yields a
/// singleton containing the `Option`, not an empty focus (compose with
/// [`optional`](crate::accessor::optional) to short-circuit on `None`).
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The field type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, FieldAccessor};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x = FieldAccessor::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(x.query(&Point { x: 10, y: 20 }), vec![10]);
/// ```
pub struct FieldAccessor<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FieldAccessor<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FieldAccessor` from a getter and setter.
    ///
    /// The getter returns the field by value (cloning as needed); the setter
    /// consumes the source and returns it rebuilt with the new field value.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Accessor<S, A> for FieldAccessor<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn query(&self, source: &S) -> Vec<A> {
        vec![(self.getter)(source)]
    }

    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        let value = (self.getter)(&source);
        (self.setter)(source, function(value))
    }
}

impl<S, A, G, St> Clone for FieldAccessor<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FieldAccessor<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FieldAccessor")
            .finish_non_exhaustive()
    }
}

/// Creates an accessor for a struct field.
///
/// Generates a [`FieldAccessor`](crate::accessor::FieldAccessor) whose getter
/// clones the field and whose setter writes it in place, so the field name is
/// stated once and checked by the compiler. The field type must implement
/// `Clone`.
///
/// # Syntax
///
/// ```text
/// prop!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use fun_land::accessor::Accessor;
/// use fun_land::prop;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { name: String, cool: Option<bool> }
///
/// let name = prop!(User, name);
/// let user = User { name: "bob".to_string(), cool: None };
///
/// assert_eq!(name.query(&user), vec!["bob".to_string()]);
///
/// // Optional fields still focus exactly one value: the Option itself.
/// assert_eq!(prop!(User, cool).query(&user), vec![None]);
/// ```
#[macro_export]
macro_rules! prop {
    ($struct_type:ty, $field:ident) => {
        $crate::accessor::FieldAccessor::new(
            |source: &$struct_type| source.$field.clone(),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::accessor::Accessor;

    #[derive(Clone, PartialEq, Debug)]
    struct User {
        name: String,
        id: u32,
        cool: Option<bool>,
    }

    fn bob() -> User {
        User {
            name: "bob".to_string(),
            id: 1,
            cool: None,
        }
    }

    #[test]
    fn test_query_is_singleton() {
        assert_eq!(prop!(User, id).query(&bob()), vec![1]);
    }

    #[test]
    fn test_query_optional_field_yields_singleton() {
        assert_eq!(prop!(User, cool).query(&bob()), vec![None]);
    }

    #[test]
    fn test_set_replaces_only_targeted_field() {
        let updated = prop!(User, id).set(bob(), 3);
        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "bob");
    }

    #[test]
    fn test_modify_transforms_field() {
        let updated = prop!(User, name).modify(bob(), |name| name.to_uppercase());
        assert_eq!(updated.name, "BOB");
    }

    #[test]
    fn test_prop_round_trip() {
        let name = prop!(User, name);
        let updated = name.set(bob(), "Robert".to_string());
        assert_eq!(name.get(&updated), Some("Robert".to_string()));
    }
}
