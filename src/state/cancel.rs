//! Cooperative cancellation for subscriptions.
//!
//! A [`CancelController`] owns the ability to cancel; its [`CancelSignal`]s
//! are handed to subscription calls, which register their teardown with
//! [`CancelSignal::on_cancel`]. Cancelling is idempotent: teardowns run
//! exactly once, in registration order, on the first `cancel` call.
//! Registering against an already-cancelled signal runs the teardown
//! immediately, so late registrations cannot leak.
//!
//! # Example
//!
//! ```
//! use fun_land::state::CancelController;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let controller = CancelController::new();
//! let signal = controller.signal();
//!
//! let torn_down = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&torn_down);
//! signal.on_cancel(move || flag.set(true));
//!
//! controller.cancel();
//! controller.cancel(); // idempotent
//! assert!(torn_down.get());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

struct CancelInner {
    cancelled: bool,
    teardowns: Vec<Box<dyn FnOnce()>>,
}

/// Owns the cancellation of a group of subscriptions.
///
/// Typically one controller per UI component or scope: subscriptions made
/// during the scope's lifetime register against [`CancelController::signal`],
/// and tearing the scope down is a single [`CancelController::cancel`] call.
pub struct CancelController {
    inner: Rc<RefCell<CancelInner>>,
}

/// A shareable handle used to register teardown callbacks.
///
/// Cloning a signal is cheap and every clone observes the same cancellation.
pub struct CancelSignal {
    inner: Rc<RefCell<CancelInner>>,
}

impl CancelController {
    /// Creates a new controller with a fresh, un-cancelled signal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(CancelInner {
                cancelled: false,
                teardowns: Vec::new(),
            })),
        }
    }

    /// Returns a signal tied to this controller.
    #[must_use]
    pub fn signal(&self) -> CancelSignal {
        CancelSignal {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Cancels the signal, running every registered teardown exactly once in
    /// registration order. Subsequent calls do nothing.
    pub fn cancel(&self) {
        let teardowns = {
            let mut inner = self.inner.borrow_mut();
            if inner.cancelled {
                return;
            }
            inner.cancelled = true;
            std::mem::take(&mut inner.teardowns)
        };
        for teardown in teardowns {
            teardown();
        }
    }
}

impl Default for CancelController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CancelController {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CancelController")
            .field("cancelled", &self.inner.borrow().cancelled)
            .finish()
    }
}

impl CancelSignal {
    /// Returns whether the owning controller has cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.borrow().cancelled
    }

    /// Registers a teardown to run on cancellation.
    ///
    /// If the signal is already cancelled, the teardown runs immediately.
    pub fn on_cancel<F>(&self, teardown: F)
    where
        F: FnOnce() + 'static,
    {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.cancelled {
                inner.teardowns.push(Box::new(teardown));
                return;
            }
        }
        teardown();
    }
}

impl Clone for CancelSignal {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for CancelSignal {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CancelSignal")
            .field("cancelled", &self.inner.borrow().cancelled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_cancel_runs_teardowns_in_registration_order() {
        let controller = CancelController::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for label in 1..=3 {
            let sink = Rc::clone(&order);
            controller.signal().on_cancel(move || sink.borrow_mut().push(label));
        }

        controller.cancel();
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let controller = CancelController::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        controller.signal().on_cancel(move || counter.set(counter.get() + 1));

        controller.cancel();
        controller.cancel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_on_cancel_after_cancel_runs_immediately() {
        let controller = CancelController::new();
        controller.cancel();

        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        controller.signal().on_cancel(move || flag.set(true));
        assert!(ran.get());
    }

    #[test]
    fn test_is_cancelled() {
        let controller = CancelController::new();
        let signal = controller.signal();
        assert!(!signal.is_cancelled());
        controller.cancel();
        assert!(signal.is_cancelled());
    }
}
