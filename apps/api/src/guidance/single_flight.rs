//! In-flight guard — at most one external call may be outstanding at a time.
//!
//! The flag is acquired with a compare-exchange and released by the guard's
//! `Drop`, so it is cleared on every exit path (success, error, panic) without
//! per-branch resets.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared in-flight flag. False initially; true for the duration of exactly
/// one outstanding request.
#[derive(Clone, Default)]
pub struct InFlight {
    flag: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to mark a request as in flight.
    /// Returns `None` when another request already holds the flag.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        self.flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: Arc::clone(&self.flag),
            })
    }

    pub fn is_in_flight(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// RAII guard holding the in-flight flag. Dropping it releases the flag.
pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
