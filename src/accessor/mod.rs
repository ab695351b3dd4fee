//! Accessors for immutable data manipulation.
//!
//! An [`Accessor`] is a composable pair of operations over a structure:
//!
//! - `query`: extracts zero, one, or many focused values
//! - `modify`: returns a new structure with every focused value transformed
//!
//! Returning a `Vec` from `query` models multiplicity: a field focus like
//! [`prop!`](crate::prop) yields exactly one value, while a traversal like
//! [`all`] or [`filter`] yields zero-to-many. Composition with
//! [`comp!`](crate::comp) flat-maps queries and lifts the inner transform
//! through the outer modify, so a single composed accessor can drill through
//! fields, array elements, optional values, and alternate views in one chain.
//!
//! # Laws
//!
//! Every Accessor must satisfy:
//!
//! 1. **Focus Agreement**: `modify` applies its transform to exactly the
//!    values `query` would return, once per element.
//!    ```text
//!    accessor.modify(source, |x| { seen.push(x.clone()); x }) collects
//!    the same elements as accessor.query(&source)
//!    ```
//!
//! 2. **Identity Modify**: transforming with the identity function is
//!    value-preserving.
//!    ```text
//!    accessor.modify(source.clone(), |x| x) == source
//!    ```
//!
//! 3. **Composition Associativity**: for accessors `a`, `b`, `c`,
//!    ```text
//!    comp!(comp!(a, b), c) behaves identically to comp!(a, comp!(b, c))
//!    ```
//!    for both `query` and `modify`.
//!
//! 4. **Unit Laws**: [`unit`] is the composition identity.
//!    ```text
//!    comp!(unit(), a) == a == comp!(a, unit())
//!    ```
//!
//! Accessors carry no identity and no mutable state; they are safe to share
//! and reuse across calls and across composed chains.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::{Accessor, all, filter};
//! use fun_land::{comp, prop};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, connections: Vec<i32> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Friend { user: User }
//!
//! let bob = Friend { user: User { name: "bob".to_string(), connections: vec![1, 2] } };
//!
//! // Compose accessors to point to things within other things
//! let connections = comp!(prop!(Friend, user), prop!(User, connections));
//! assert_eq!(comp!(connections.clone(), all()).query(&bob), vec![1, 2]);
//!
//! // Narrow the focus with a predicate
//! let odd = comp!(connections, filter(|x: &i32| x % 2 == 1));
//! let updated = odd.set(bob, 0);
//! assert_eq!(updated.user.connections, vec![0, 2]);
//! ```
//!
//! # Absence is data
//!
//! Missing or unmatched foci are represented as zero focused elements, never
//! as errors: [`optional`] queries `[]` over `None`, [`index`] queries `[]`
//! out of bounds, and [`Accessor::get`] returns `None` on an empty focus.

mod compose;
mod core;
mod field;
mod foci;
mod identity;
mod option;
mod project;
mod sequence;
mod view;

pub use self::core::Accessor;

pub use compose::ComposedAccessor;

pub use field::FieldAccessor;

pub use foci::Foci;
pub use foci::acc;

pub use identity::IdentityAccessor;
pub use identity::ReadOnlyAccessor;
pub use identity::read_only;
pub use identity::unit;

pub use option::OptionAccessor;
pub use option::optional;

pub use project::SubAccessor;
pub use project::sub;

pub use sequence::AfterAccessor;
pub use sequence::BeforeAccessor;
pub use sequence::EachAccessor;
pub use sequence::FilterAccessor;
pub use sequence::IndexAccessor;
pub use sequence::after;
pub use sequence::all;
pub use sequence::before;
pub use sequence::filter;
pub use sequence::index;

pub use view::ViewAccessor;
pub use view::viewed;
