//! Single-shot debounce timer
//!
//! An owned timer handle that runs an action after a quiet window. Arming
//! always cancels the previous timer first, so only a timer that fires
//! without being superseded runs its action.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Owned single-shot timer with `arm`/`cancel` semantics.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl DebounceTimer {
    /// Create an unarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending timer and arm a fresh one. The action runs once
    /// the window elapses without another `arm` or `cancel`.
    pub fn arm<F>(&self, window: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = slot.take() {
            pending.abort();
        }
        // Pin the deadline now so the window starts at arm time, not at
        // the spawned task's first poll.
        let deadline = tokio::time::Instant::now() + window;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            action.await;
        }));
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&self) {
        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = slot.take() {
            pending.abort();
        }
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
