//! The accessor-focusable reactive state view.
//!
//! A [`FunState`] pairs a root [`StateEngine`] with an accessor from the
//! root state to the current focus. Every `focus` call composes one more
//! accessor onto that path and returns a fresh view against the *same* root
//! engine — views are cheap, transient values with no storage of their own.
//!
//! Watching re-derives the focused value from the full new state on every
//! root change and fires only when the value actually changed; the cost per
//! notification is the accessor's own query cost, independent of the size of
//! the rest of the state tree.

use std::marker::PhantomData;

use crate::accessor::{Accessor, ComposedAccessor, IdentityAccessor, unit};
use crate::state::cancel::CancelSignal;
use crate::state::engine::StateEngine;

/// The root view type: a `FunState` focused on the whole state.
pub type RootState<State> = FunState<State, State, IdentityAccessor<State>>;

/// Creates a standalone reactive state container holding `initial`.
///
/// Convenience constructor over a fresh [`StateEngine`]; use
/// [`FunState::with_engine`] to build a view over a shared engine.
///
/// # Example
///
/// ```
/// use fun_land::state::fun_state;
///
/// let state = fun_state(1);
/// state.modify(|n| n + 1);
/// assert_eq!(state.get(), Some(2));
/// ```
#[must_use]
pub fn fun_state<State: Clone + 'static>(initial: State) -> RootState<State> {
    FunState::with_engine(StateEngine::new(initial))
}

/// A reactive, accessor-focusable read/write view over a root state cell.
///
/// # Type Parameters
///
/// - `State`: The root state type held by the engine
/// - `View`: The focused type of this view
/// - `Acc`: The composed accessor type from root to focus
///
/// A `FunState` owns no state itself; it closes over the engine handle and
/// the accessor, and every operation reads or transforms the root state
/// through that accessor. Views may be freely cloned and re-created; only
/// subscriptions hold resources, and those are torn down by the
/// [`CancelSignal`] passed at subscription time.
pub struct FunState<State, View, Acc> {
    engine: StateEngine<State>,
    view: Acc,
    _marker: PhantomData<View>,
}

impl<State: Clone + 'static> RootState<State> {
    /// Creates a root view over an existing engine.
    #[must_use]
    pub fn with_engine(engine: StateEngine<State>) -> Self {
        Self {
            engine,
            view: unit(),
            _marker: PhantomData,
        }
    }
}

impl<State, View, Acc> FunState<State, View, Acc>
where
    State: Clone + 'static,
    Acc: Accessor<State, View>,
{
    /// Extracts the first focused value.
    ///
    /// A lens-like focus (fields, in-bounds indices) always yields `Some`;
    /// a traversal-backed view with zero current matches yields `None`.
    /// This is a recoverable condition, not an error — callers needing the
    /// whole multiplicity should use [`FunState::get_all`].
    #[must_use]
    pub fn get(&self) -> Option<View> {
        self.view.get(&self.engine.get_state())
    }

    /// Extracts all currently focused values.
    #[must_use]
    pub fn get_all(&self) -> Vec<View> {
        self.view.query(&self.engine.get_state())
    }

    /// Queries the state using an accessor relative to this view.
    pub fn query<A, T>(&self, accessor: T) -> Vec<A>
    where
        T: Accessor<View, A>,
    {
        let root = self.engine.get_state();
        self.view
            .query(&root)
            .iter()
            .flat_map(|focused| accessor.query(focused))
            .collect()
    }

    /// Transforms every focused value, lifting the change back to the root.
    ///
    /// Triggers engine-level notification even when the transform leaves the
    /// value equal; watchers filter on actual change.
    pub fn modify<F>(&self, transform: F)
    where
        F: FnMut(View) -> View,
    {
        self.engine
            .mod_state(|root| self.view.modify(root, transform));
    }

    /// Replaces every focused value.
    ///
    /// For a traversal-backed view this sets every focused element to the
    /// same value.
    pub fn set(&self, value: View)
    where
        View: Clone,
    {
        self.engine.mod_state(|root| self.view.set(root, value));
    }

    /// Creates a new `FunState` focused through the passed accessor.
    ///
    /// The new view composes accessors against the original root engine —
    /// focusing a focused state never stacks intermediate engines, so
    /// re-focusing is cheap at any depth.
    pub fn focus<Sub, T>(&self, accessor: T) -> FunState<State, Sub, ComposedAccessor<Acc, T, View>>
    where
        T: Accessor<View, Sub>,
        Acc: Clone,
    {
        FunState {
            engine: self.engine.clone(),
            view: self.view.clone().compose(accessor),
            _marker: PhantomData,
        }
    }

    /// Subscribes to changes of the focused value.
    ///
    /// The callback fires immediately with the current value, then once per
    /// root change whose re-derived focused value differs from the last one
    /// observed (`PartialEq`). Sibling changes that leave this focus equal do
    /// not fire. `None` means the focus currently matches nothing.
    ///
    /// Teardown is driven by `signal`; watching with an already-cancelled
    /// signal does nothing.
    pub fn watch<F>(&self, signal: &CancelSignal, mut callback: F)
    where
        F: FnMut(Option<View>) + 'static,
        View: PartialEq + Clone + 'static,
        Acc: Clone + 'static,
    {
        if signal.is_cancelled() {
            return;
        }
        let mut last = self.get();
        callback(last.clone());
        let view = self.view.clone();
        let unsubscribe = self.engine.subscribe(move |root: &State| {
            let next = view.get(root);
            if next != last {
                last = next.clone();
                callback(next);
            }
        });
        signal.on_cancel(unsubscribe);
    }

    /// Alias for [`FunState::watch`].
    pub fn subscribe<F>(&self, signal: &CancelSignal, callback: F)
    where
        F: FnMut(Option<View>) + 'static,
        View: PartialEq + Clone + 'static,
        Acc: Clone + 'static,
    {
        self.watch(signal, callback);
    }

    /// Subscribes to changes of the entire traversal result.
    ///
    /// Like [`FunState::watch`] but compares the whole focused set (length
    /// and element-wise equality), for traversal-backed views where all
    /// matches matter.
    pub fn watch_all<F>(&self, signal: &CancelSignal, mut callback: F)
    where
        F: FnMut(Vec<View>) + 'static,
        View: PartialEq + Clone + 'static,
        Acc: Clone + 'static,
    {
        if signal.is_cancelled() {
            return;
        }
        let mut last = self.get_all();
        callback(last.clone());
        let view = self.view.clone();
        let unsubscribe = self.engine.subscribe(move |root: &State| {
            let next = view.query(root);
            if next != last {
                last = next.clone();
                callback(next);
            }
        });
        signal.on_cancel(unsubscribe);
    }
}

impl<State, View, Acc: Clone> Clone for FunState<State, View, Acc> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            view: self.view.clone(),
            _marker: PhantomData,
        }
    }
}

impl<State: std::fmt::Debug, View, Acc> std::fmt::Debug for FunState<State, View, Acc> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunState")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
