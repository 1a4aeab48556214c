//! Session concurrency guard.

use std::sync::atomic::{AtomicBool, Ordering};

/// Guard that clears the `pending` flag on drop, ensuring it is released
/// on every exit path of a send attempt, including cancellation.
pub(super) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Attempt to mark a fetch outstanding. Returns `None` if one
    /// already is.
    pub(super) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
