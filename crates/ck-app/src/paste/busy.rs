use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Holds the executor's busy flag for the lifetime of one paste.
///
/// Dropping the guard clears the flag, so a cancelled or panicking paste
/// cannot leave the executor locked.
pub(crate) struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl BusyGuard {
    pub(crate) fn try_acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag: flag.clone() })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
