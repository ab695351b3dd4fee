//! A reactive state container built on accessors.
//!
//! A single [`StateEngine`] owns the canonical state. A [`FunState`] is a
//! transient view over that engine: it pairs the engine with a composed
//! accessor from the root state to the current focus. Focusing a focused
//! state composes accessors against the *original* root engine rather than
//! stacking wrapped engines, so re-focusing at any depth costs one accessor
//! composition and subscriptions always attach directly to the root.
//!
//! Subscriptions are change-tracked: on every root-level change a watcher
//! re-derives its focused value and fires only when that value actually
//! changed. Teardown is driven by a cooperative [`CancelSignal`]; there is no
//! explicit close/dispose on the state itself.
//!
//! # Example
//!
//! ```
//! use fun_land::prelude::*;
//! use fun_land::prop;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct App { count: i32, label: String }
//!
//! let state = fun_state(App { count: 0, label: "counter".to_string() });
//! let count = state.focus(prop!(App, count));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let controller = CancelController::new();
//! let sink = Rc::clone(&seen);
//! count.watch(&controller.signal(), move |value| {
//!     sink.borrow_mut().extend(value);
//! });
//!
//! count.set(1);
//! state.modify(|mut app| { app.label = "renamed".to_string(); app }); // count unchanged
//! count.set(2);
//! controller.cancel();
//! count.set(3); // not observed
//!
//! assert_eq!(*seen.borrow(), vec![0, 1, 2]);
//! ```

mod cancel;
mod engine;
mod fun_state;

pub use cancel::CancelController;
pub use cancel::CancelSignal;

pub use engine::StateEngine;
pub use engine::Unsubscribe;

pub use fun_state::FunState;
pub use fun_state::RootState;
pub use fun_state::fun_state;
