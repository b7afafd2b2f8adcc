//! One-shot readiness signal for late-initializing collaborators.
//!
//! A collaborator that becomes usable after page start (the profile data
//! loader, for example) publishes its value exactly once. Consumers await a
//! clone of [`Readiness`] instead of polling on a timer. If the publisher is
//! dropped without publishing, every waiter resolves to `None`.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

use futures::channel::oneshot;
use futures::future::{FutureExt, Shared};

/// Publishing half. Consumed by [`Publisher::publish`].
#[derive(Debug)]
pub struct Publisher<T> {
    tx: oneshot::Sender<T>,
}

/// Subscribing half. Cheap to clone; all clones observe the same value.
#[derive(Clone, Debug)]
pub struct Readiness<T: Clone> {
    rx: Shared<oneshot::Receiver<T>>,
}

/// Create a connected publisher/readiness pair.
#[must_use]
pub fn readiness<T: Clone>() -> (Publisher<T>, Readiness<T>) {
    let (tx, rx) = oneshot::channel();
    (Publisher { tx }, Readiness { rx: rx.shared() })
}

impl<T> Publisher<T> {
    /// Publish the value. Returns `false` if every subscriber is gone.
    pub fn publish(self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

impl<T: Clone> Readiness<T> {
    /// Wait for the published value; `None` if the publisher was dropped.
    pub async fn wait(&self) -> Option<T> {
        self.rx.clone().await.ok()
    }

    /// Non-blocking view of an already-resolved value.
    #[must_use]
    pub fn peek(&self) -> Option<T> {
        self.rx
            .peek()
            .and_then(|resolved| resolved.as_ref().ok().cloned())
    }
}
