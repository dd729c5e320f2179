//! Fetch Cancellation Guard
//!
//! A fetch can outlive the view that issued it. Every page checks a
//! guard before committing a response to state so a torn-down view never
//! writes again.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::on_cleanup;

/// Cheap clonable liveness flag, flipped once on teardown
#[derive(Clone, Debug, Default)]
pub struct FetchGuard(Rc<Cell<bool>>);

impl FetchGuard {
    pub fn new() -> Self {
        FetchGuard(Rc::new(Cell::new(false)))
    }

    /// True until `cancel` is called
    pub fn is_live(&self) -> bool {
        !self.0.get()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }
}

/// Create a guard tied to the current reactive scope: it cancels when the
/// owning view is cleaned up.
pub fn use_fetch_guard() -> FetchGuard {
    let guard = FetchGuard::new();
    let handle = send_wrapper::SendWrapper::new(guard.clone());
    on_cleanup(move || handle.cancel());
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_starts_live_and_cancels_once() {
        let guard = FetchGuard::new();
        assert!(guard.is_live());

        // Clones observe the same flag, the way a spawned fetch holds one
        let held_by_fetch = guard.clone();
        guard.cancel();
        assert!(!held_by_fetch.is_live());

        // Cancelling again changes nothing
        guard.cancel();
        assert!(!held_by_fetch.is_live());
    }
}
