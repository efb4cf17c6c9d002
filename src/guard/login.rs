#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::Cell;
use std::rc::Rc;

/// Single-flight flag for login attempts.
///
/// Exclusively owned by one `SecureRoute` instance; cloned handles share
/// the same flag so the effect closure and the render closure observe a
/// single value. The flag is set when an attempt starts and cleared only
/// when an authenticated session is observed. A failed attempt leaves it
/// set, blocking further attempts until that happens or the instance is
/// recreated.
#[derive(Clone, Debug, Default)]
pub struct LoginTrigger {
    in_flight: Rc<Cell<bool>>,
}

impl LoginTrigger {
    /// A trigger with no attempt in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an attempt is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Claim the flight slot.
    ///
    /// Returns `false` when an attempt is already in flight, in which case
    /// the caller must not start another.
    pub fn try_begin(&self) -> bool {
        if self.in_flight.get() {
            return false;
        }
        self.in_flight.set(true);
        true
    }

    /// Release the slot after observing an authenticated session.
    pub fn clear(&self) {
        self.in_flight.set(false);
    }
}
