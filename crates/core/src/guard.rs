//! Mutual-exclusion guard around shared state.

use std::sync::{Mutex, PoisonError};

/// Serializes access to `T`: [`run`](Guard::run) holds the lock for the
/// whole closure, so concurrent callers execute one after another.
///
/// A panic inside a previous closure does not wedge the guard; the lock is
/// recovered and the state is handed to the next caller as-is.
#[derive(Debug, Default)]
pub struct Guard<T> {
    inner: Mutex<T>,
}

impl<T> Guard<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Run `f` with exclusive access to the guarded state.
    pub fn run<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}
