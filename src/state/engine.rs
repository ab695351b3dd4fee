//! The minimal mutable cell backing a `FunState` tree.
//!
//! A [`StateEngine`] owns the canonical state and a listener list.
//! [`StateEngine::mod_state`] applies a transform and synchronously notifies
//! every current listener with the new state, in registration order, before
//! returning. There is no batching and no async scheduling; ordering follows
//! the order of `mod_state` calls exactly.
//!
//! Cloning an engine clones a handle to the same cell, so focused views can
//! share one canonical state.

use std::cell::RefCell;
use std::rc::Rc;

/// A once-callable handle that removes a subscription.
///
/// Dropping it without calling leaves the subscription in place.
pub type Unsubscribe = Box<dyn FnOnce()>;

type Listener<State> = Rc<RefCell<dyn FnMut(&State)>>;

struct EngineInner<State> {
    state: State,
    listeners: Vec<(u64, Listener<State>)>,
    next_id: u64,
}

/// The canonical mutable state cell: get, transform-and-notify, subscribe.
///
/// Single-threaded by design (`Rc`-shared, interior mutability); all
/// notification is synchronous and re-entrant `mod_state` calls from inside
/// a listener are permitted. A listener that re-enters is skipped in the
/// nested notification pass, which bounds self-recursion.
///
/// # Example
///
/// ```
/// use fun_land::state::StateEngine;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let engine = StateEngine::new(1);
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let unsubscribe = engine.subscribe(move |state: &i32| sink.borrow_mut().push(*state));
///
/// engine.mod_state(|n| n + 1);
/// unsubscribe();
/// engine.mod_state(|n| n + 1);
///
/// assert_eq!(engine.get_state(), 3);
/// assert_eq!(*seen.borrow(), vec![2]);
/// ```
pub struct StateEngine<State> {
    inner: Rc<RefCell<EngineInner<State>>>,
}

impl<State: Clone + 'static> StateEngine<State> {
    /// Creates an engine holding the passed initial state.
    #[must_use]
    pub fn new(initial: State) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EngineInner {
                state: initial,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Returns a clone of the current state.
    #[must_use]
    pub fn get_state(&self) -> State {
        self.inner.borrow().state.clone()
    }

    /// Applies `transform` to the current state, stores the result, and
    /// synchronously notifies all current listeners with the new state.
    ///
    /// The store happens only after `transform` returns: if the transform
    /// panics, the previous state is left intact and no listener fires.
    pub fn mod_state<F>(&self, transform: F)
    where
        F: FnOnce(State) -> State,
    {
        let current = self.inner.borrow().state.clone();
        let next = transform(current);
        self.inner.borrow_mut().state = next;
        self.notify();
    }

    /// Registers a listener invoked after every state change.
    ///
    /// Returns an [`Unsubscribe`] handle that removes the listener. Removal
    /// is keyed, so an unsubscribe handle only ever removes its own
    /// subscription.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: FnMut(&State) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .listeners
                .push((id, Rc::new(RefCell::new(listener))));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(key, _)| *key != id);
            }
        })
    }

    fn notify(&self) {
        // Snapshot so listeners registered or removed mid-notification do
        // not shift this pass; state is re-read per listener so re-entrant
        // mod_state calls are visible to listeners later in the order.
        let snapshot: Vec<Listener<State>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            let state = self.inner.borrow().state.clone();
            // Skipped when the listener itself is mid-call (re-entrancy).
            if let Ok(mut callback) = listener.try_borrow_mut() {
                callback(&state);
            }
        }
    }
}

impl<State> Clone for StateEngine<State> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<State: std::fmt::Debug> std::fmt::Debug for StateEngine<State> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("StateEngine")
            .field("state", &self.inner.borrow().state)
            .field("listeners", &self.inner.borrow().listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_state_returns_current_value() {
        let engine = StateEngine::new(41);
        assert_eq!(engine.get_state(), 41);
    }

    #[test]
    fn test_mod_state_applies_transform() {
        let engine = StateEngine::new(41);
        engine.mod_state(|n| n + 1);
        assert_eq!(engine.get_state(), 42);
    }

    #[test]
    fn test_listeners_fire_in_registration_order() {
        let engine = StateEngine::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        for label in 1..=3 {
            let sink = Rc::clone(&order);
            let _keep = engine.subscribe(move |_: &i32| sink.borrow_mut().push(label));
        }

        engine.mod_state(|n| n + 1);
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unsubscribe_removes_listener() {
        let engine = StateEngine::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let unsubscribe = engine.subscribe(move |state: &i32| sink.borrow_mut().push(*state));

        engine.mod_state(|n| n + 1);
        unsubscribe();
        engine.mod_state(|n| n + 1);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_reentrant_mod_state_is_bounded() {
        let engine = StateEngine::new(0);
        let nested = engine.clone();
        let _keep = engine.subscribe(move |state: &i32| {
            if *state < 3 {
                nested.mod_state(|n| n + 1);
            }
        });

        engine.mod_state(|n| n + 1);
        // One nested pass runs; the re-entrant listener is skipped inside
        // its own nested notification, so the recursion stops there.
        assert_eq!(engine.get_state(), 2);
    }

    #[test]
    fn test_later_listener_observes_reentrant_update() {
        let engine = StateEngine::new(0);
        let bumper = engine.clone();
        let _first = engine.subscribe(move |state: &i32| {
            if *state == 1 {
                bumper.mod_state(|n| n + 10);
            }
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _second = engine.subscribe(move |state: &i32| sink.borrow_mut().push(*state));

        engine.mod_state(|n| n + 1);
        // The nested pass fires second with 11, then the outer pass re-reads.
        assert_eq!(*seen.borrow(), vec![11, 11]);
    }
}
