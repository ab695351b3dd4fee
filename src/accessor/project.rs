//! Projection accessors for focusing a sub-struct.
//!
//! [`sub`] focuses a projected sub-structure: `query` picks the projection
//! out of the source, and `modify` merges the (possibly transformed)
//! projection back, preserving the untouched fields. The
//! [`sub!`](crate::sub) macro generates the projection pair from a field
//! list.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::Accessor;
//! use fun_land::sub;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, id: u32, connections: Vec<i32> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct SubUser { name: String, connections: Vec<i32> }
//!
//! let slice = sub!(User => SubUser { name, connections });
//! let bob = User { name: "bob".to_string(), id: 1, connections: vec![1, 2] };
//!
//! let renamed = slice.modify(bob, |mut s| { s.name = "Robert".to_string(); s });
//! assert_eq!(renamed.name, "Robert");
//! assert_eq!(renamed.id, 1);
//! ```

use std::marker::PhantomData;

use crate::accessor::Accessor;

/// An accessor that focuses a projected sub-structure through a
/// project/merge function pair.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `Sub`: The projected type
/// - `G`: The projection function type
/// - `M`: The merge-back function type
pub struct SubAccessor<S, Sub, G, M>
where
    G: Fn(&S) -> Sub,
    M: Fn(S, Sub) -> S,
{
    project: G,
    merge: M,
    _marker: PhantomData<(S, Sub)>,
}

impl<S, Sub, G, M> SubAccessor<S, Sub, G, M>
where
    G: Fn(&S) -> Sub,
    M: Fn(S, Sub) -> S,
{
    /// Creates a new `SubAccessor` from a projection and a merge function.
    ///
    /// `merge` receives the original source and the transformed projection
    /// and must write the projected fields back, leaving the rest intact.
    #[must_use]
    pub const fn new(project: G, merge: M) -> Self {
        Self {
            project,
            merge,
            _marker: PhantomData,
        }
    }
}

/// Creates an accessor that targets a projected subset of a structure.
///
/// Prefer the [`sub!`](crate::sub) macro, which generates the pair from a
/// field list.
#[must_use]
pub const fn sub<S, Sub, G, M>(project: G, merge: M) -> SubAccessor<S, Sub, G, M>
where
    G: Fn(&S) -> Sub,
    M: Fn(S, Sub) -> S,
{
    SubAccessor::new(project, merge)
}

impl<S, Sub, G, M> Accessor<S, Sub> for SubAccessor<S, Sub, G, M>
where
    G: Fn(&S) -> Sub,
    M: Fn(S, Sub) -> S,
{
    fn query(&self, source: &S) -> Vec<Sub> {
        vec![(self.project)(source)]
    }

    fn modify<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(Sub) -> Sub,
    {
        let projection = (self.project)(&source);
        (self.merge)(source, function(projection))
    }
}

impl<S, Sub, G, M> Clone for SubAccessor<S, Sub, G, M>
where
    G: Fn(&S) -> Sub + Clone,
    M: Fn(S, Sub) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            project: self.project.clone(),
            merge: self.merge.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, Sub, G, M> std::fmt::Debug for SubAccessor<S, Sub, G, M>
where
    G: Fn(&S) -> Sub,
    M: Fn(S, Sub) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("SubAccessor").finish_non_exhaustive()
    }
}

/// Creates a [`SubAccessor`](crate::accessor::SubAccessor) projecting the
/// listed fields of a struct into a sub-struct and merging them back.
///
/// The listed fields must exist with identical names and types on both
/// structs, and must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// sub!(SourceType => SubType { field_a, field_b })
/// ```
///
/// # Example
///
/// ```
/// use fun_land::accessor::Accessor;
/// use fun_land::sub;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { name: String, id: u32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct NameOnly { name: String }
///
/// let name_slice = sub!(User => NameOnly { name });
/// let bob = User { name: "bob".to_string(), id: 1 };
/// assert_eq!(name_slice.query(&bob), vec![NameOnly { name: "bob".to_string() }]);
/// ```
#[macro_export]
macro_rules! sub {
    ($struct_type:ty => $sub_type:ident { $($field:ident),+ $(,)? }) => {
        $crate::accessor::SubAccessor::new(
            |source: &$struct_type| $sub_type {
                $($field: source.$field.clone()),+
            },
            |mut source: $struct_type, part: $sub_type| {
                $(source.$field = part.$field;)+
                source
            },
        )
    };
}
