//! Time source for the timer-driven state machines.
//!
//! Everything that waits (tweens, toasts, the simulated form submission) is
//! written against `now_ms` so tests can step time by hand. The browser
//! layer implements [`Clock`] over `performance.now()`.

use std::cell::Cell;

/// Monotonic milliseconds since some fixed origin
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Hand-driven clock for tests.
///
/// ```
/// use site_core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new(0.0);
/// clock.advance(250.0);
/// assert_eq!(clock.now_ms(), 250.0);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        ManualClock {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
