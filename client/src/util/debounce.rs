//! Debounce and throttle bookkeeping for browser event streams.
//!
//! DESIGN
//! ======
//! [`Throttle`] is pure window bookkeeping, testable natively. [`TimerSlot`]
//! is the browser half of a trailing debounce: it owns at most one pending
//! `gloo` timeout, and scheduling a new one drops (and so cancels) the
//! previous one. Pending work is replaced, never stacked.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Trailing throttle: at most one evaluation per window, scheduled by the
/// first signal of the window and ignoring the rest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Throttle {
    armed: bool,
}

impl Throttle {
    /// Returns `true` when the caller should schedule the trailing run.
    pub fn signal(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Called from the trailing run to reopen the window.
    pub fn complete(&mut self) {
        self.armed = false;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Single replaceable browser timer.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct TimerSlot {
    timeout: Option<gloo_timers::callback::Timeout>,
}

#[cfg(feature = "hydrate")]
impl TimerSlot {
    /// Schedule `f` after `ms`, cancelling whatever was pending.
    pub fn replace(&mut self, ms: u32, f: impl FnOnce() + 'static) {
        self.cancel();
        self.timeout = Some(gloo_timers::callback::Timeout::new(ms, f));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.timeout.take() {
            timeout.cancel();
        }
    }
}
