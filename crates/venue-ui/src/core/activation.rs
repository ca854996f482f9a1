//! Cancellable view activations.
//!
//! # Design
//! - Every (event name, event date) activation gets its own handle.
//! - The effect teardown cancels the handle; a response that resolves after
//!   cancellation is dropped instead of overwriting the newer view.
//! - The request itself is not aborted, only its result is discarded.

use std::cell::Cell;
use std::rc::Rc;

/// Shared liveness flag for one activation.
#[derive(Clone, Debug)]
pub struct Activation {
    live: Rc<Cell<bool>>,
}

impl Activation {
    /// Start a live activation.
    #[must_use]
    pub fn begin() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    /// Whether results for this activation should still be applied.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Mark the activation as superseded or unmounted.
    pub fn cancel(&self) {
        self.live.set(false);
    }

    /// Apply `value` only while the activation is live. Returns whether it was applied.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn live_activation_applies_result() {
        let activation = Activation::begin();
        let slot = RefCell::new(None);
        assert!(activation.deliver("loaded", |value| *slot.borrow_mut() = Some(value)));
        assert_eq!(*slot.borrow(), Some("loaded"));
    }

    #[test]
    fn cancelled_activation_drops_late_response() {
        let first = Activation::begin();
        let pending = first.clone();
        first.cancel();
        let second = Activation::begin();

        let slot = RefCell::new(Vec::new());
        assert!(second.deliver("second", |value| slot.borrow_mut().push(value)));
        assert!(!pending.deliver("first", |value| slot.borrow_mut().push(value)));
        assert_eq!(*slot.borrow(), vec!["second"]);
        assert!(!pending.is_live());
        assert!(second.is_live());
    }
}
