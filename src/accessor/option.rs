//! Optional-value accessors.
//!
//! [`optional`] focuses the value inside an `Option` (zero or one element).
//! `None` focuses nothing: queries come back empty and `modify` returns the
//! source untouched without invoking the transform. This is the
//! short-circuit that makes drilling into optional nested fields safe.
//!
//! # Example
//!
//! ```
//! use fun_land::accessor::{Accessor, optional};
//! use fun_land::{comp, prop};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Profile { value: bool }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { profile: Option<Profile> }
//!
//! let value = comp!(prop!(User, profile), optional(), prop!(Profile, value));
//!
//! let missing = User { profile: None };
//! assert_eq!(value.query(&missing), Vec::<bool>::new());
//! assert_eq!(value.modify(missing.clone(), |v| !v), missing);
//!
//! let present = User { profile: Some(Profile { value: true }) };
//! assert_eq!(value.query(&present), vec![true]);
//! assert_eq!(value.modify(present, |v| !v).profile, Some(Profile { value: false }));
//! ```

use std::marker::PhantomData;

use crate::accessor::Accessor;

/// An accessor that focuses the value inside an `Option` (zero or one
/// element).
pub struct OptionAccessor<A> {
    _marker: PhantomData<A>,
}

/// Creates an accessor over `Option<A>` that short-circuits on `None`.
///
/// # Example
///
/// ```
/// use fun_land::accessor::{Accessor, optional};
///
/// assert_eq!(optional::<i32>().query(&Some(1)), vec![1]);
/// assert_eq!(optional::<i32>().query(&None), Vec::<i32>::new());
/// assert_eq!(optional::<i32>().modify(None, |x| x + 1), None);
/// ```
#[must_use]
pub const fn optional<A>() -> OptionAccessor<A> {
    OptionAccessor {
        _marker: PhantomData,
    }
}

impl<A> Default for OptionAccessor<A> {
    fn default() -> Self {
        optional()
    }
}

impl<A> Clone for OptionAccessor<A> {
    fn clone(&self) -> Self {
        optional()
    }
}

impl<A> std::fmt::Debug for OptionAccessor<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("OptionAccessor").finish()
    }
}

impl<A: Clone> Accessor<Option<A>, A> for OptionAccessor<A> {
    fn query(&self, source: &Option<A>) -> Vec<A> {
        source.iter().cloned().collect()
    }

    fn modify<F>(&self, source: Option<A>, function: F) -> Option<A>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{comp, prop};

    #[derive(Clone, PartialEq, Debug)]
    struct Complex {
        value: bool,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct User {
        name: String,
        complex: Option<Complex>,
    }

    fn bob() -> User {
        User {
            name: "bob".to_string(),
            complex: None,
        }
    }

    fn complex_bob() -> User {
        User {
            complex: Some(Complex { value: true }),
            ..bob()
        }
    }

    #[test]
    fn test_query_none_is_empty() {
        assert_eq!(optional::<i32>().query(&None), Vec::<i32>::new());
    }

    #[test]
    fn test_query_some_is_singleton() {
        assert_eq!(optional::<i32>().query(&Some(1)), vec![1]);
    }

    #[test]
    fn test_mod_skips_transform_on_none() {
        let modified = optional::<i32>().modify(None, |_| panic!("transform must not run"));
        assert_eq!(modified, None);
    }

    #[test]
    fn test_chain_query_empty_over_missing() {
        let chain = comp!(prop!(User, complex), optional(), prop!(Complex, value));
        assert_eq!(chain.query(&bob()), Vec::<bool>::new());
    }

    #[test]
    fn test_chain_query_value_if_present() {
        let chain = comp!(prop!(User, complex), optional(), prop!(Complex, value));
        assert_eq!(chain.query(&complex_bob()), vec![true]);
    }

    #[test]
    fn test_chain_mod_is_noop_over_missing() {
        let chain = comp!(prop!(User, complex), optional(), prop!(Complex, value));
        assert_eq!(chain.modify(bob(), |value| !value), bob());
    }

    #[test]
    fn test_chain_mod_works_if_present() {
        let chain = comp!(prop!(User, complex), optional(), prop!(Complex, value));
        let updated = chain.modify(complex_bob(), |value| !value);
        assert_eq!(updated.complex, Some(Complex { value: false }));
    }
}
