//! # fun-land
//!
//! Composable accessors (optics) and a reactive state container for
//! immutable data.
//!
//! ## Overview
//!
//! This library provides two layers:
//!
//! - **Accessors**: composable query/modify pairs that focus into nested,
//!   possibly multi-valued structures and transform them immutably.
//! - **FunState**: a reactive state container built on accessors, with
//!   change-tracked subscriptions and arbitrary-depth re-focusing.
//!
//! ## Feature Flags
//!
//! - `accessor`: the accessor algebra (primitives, composition, fluent builder)
//! - `state`: the reactive state container (implies `accessor`)
//!
//! ## Example
//!
//! ```rust
//! use fun_land::prelude::*;
//! use fun_land::{comp, prop};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User {
//!     name: String,
//!     connections: Vec<i32>,
//! }
//!
//! let bob = User { name: "bob".to_string(), connections: vec![1, 2] };
//!
//! let second_connection = comp!(prop!(User, connections), index(1));
//! assert_eq!(second_connection.query(&bob), vec![2]);
//!
//! let updated = second_connection.modify(bob, |x| x + 1);
//! assert_eq!(updated.connections, vec![1, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fun_land::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "accessor")]
    pub use crate::accessor::*;

    #[cfg(feature = "state")]
    pub use crate::state::*;
}

#[cfg(feature = "accessor")]
pub mod accessor;

#[cfg(feature = "state")]
pub mod state;
