//! Self-reverting UI acknowledgements (copied, subscribed, toasts).
//!
//! An acknowledgement is active from `show` until a fixed deadline. Further
//! user action never extends or cancels a deadline already running except by
//! showing again.

#[cfg(test)]
#[path = "transient_test.rs"]
mod transient_test;

use std::collections::BTreeMap;

/// A single timed flag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transient {
    until_ms: Option<f64>,
}

impl Transient {
    pub fn show(&mut self, now_ms: f64, duration_ms: f64) {
        self.until_ms = Some(now_ms + duration_ms);
    }

    #[must_use]
    pub fn is_active(&self, now_ms: f64) -> bool {
        self.until_ms.is_some_and(|until| now_ms < until)
    }

    pub fn clear(&mut self) {
        self.until_ms = None;
    }
}

/// Timed flags keyed by item.
#[derive(Clone, Debug, PartialEq)]
pub struct TransientSet<K: Ord> {
    deadlines: BTreeMap<K, f64>,
}

impl<K: Ord> Default for TransientSet<K> {
    fn default() -> Self {
        Self { deadlines: BTreeMap::new() }
    }
}

impl<K: Ord> TransientSet<K> {
    pub fn show(&mut self, key: K, now_ms: f64, duration_ms: f64) {
        self.deadlines.insert(key, now_ms + duration_ms);
    }

    #[must_use]
    pub fn is_active(&self, key: &K, now_ms: f64) -> bool {
        self.deadlines
            .get(key)
            .is_some_and(|until| now_ms < *until)
    }

    /// Drop the flag for `key` before its deadline.
    pub fn clear(&mut self, key: &K) {
        self.deadlines.remove(key);
    }

    /// Forget expired flags.
    pub fn prune(&mut self, now_ms: f64) {
        self.deadlines.retain(|_, until| now_ms < *until);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
