//! Clock Module
//!
//! Injectable time source used to decide entry liveness. Production code
//! binds to the system clock; tests inject a steppable manual clock.

use std::sync::atomic::{AtomicI64, Ordering};

// == Clock Trait ==
/// Time source capability.
///
/// Implementations are expected to return non-decreasing values across calls
/// within one cache's lifetime; this is not enforced.
pub trait Clock: Send + Sync {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

// == System Clock ==
/// Production clock reading ambient system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

// == Manual Clock ==
/// Steppable clock for deterministic tests.
///
/// Share it via `Arc`: hand one clone to the cache, keep another to advance
/// time between assertions.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    // == Constructor ==
    /// Creates a manual clock starting at the given millisecond timestamp.
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(start_millis),
        }
    }

    // == Set ==
    /// Moves the clock to an absolute millisecond timestamp.
    pub fn set(&self, millis: i64) {
        self.now.store(millis, Ordering::SeqCst);
    }

    // == Advance ==
    /// Moves the clock forward by the given number of milliseconds.
    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
