//! Trailing-edge call collapsing for chatty UI events.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Wraps a callback so rapid repeated calls collapse into a single
/// execution after a quiet period, carrying the latest call's argument.
///
/// Each instance owns its pending timer privately; independent debouncers
/// never interact. Dropping the wrapper does not cancel an already
/// scheduled trailing call.
pub struct Debouncer<T> {
    callback: Arc<dyn Fn(T) + Send + Sync>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(callback: F, wait: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedule the callback with `value`, superseding any pending run.
    /// Must be called from within a tokio runtime.
    pub fn call(&self, value: T) {
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(value);
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(superseded) = pending.replace(handle) {
            superseded.abort();
        }
    }
}

/// Wrap `callback` in a [`Debouncer`] with the given quiet period.
pub fn debounce<T, F>(callback: F, wait: Duration) -> Debouncer<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debouncer::new(callback, wait)
}
