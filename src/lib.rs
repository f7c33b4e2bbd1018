//! Aged Cache - a bounded-lifetime key/value cache
//!
//! Entries are inserted with an individual retention period and are treated
//! as absent once that period elapses, whether or not they have been
//! physically removed. Eviction is lazy: expired entries are swept only as a
//! side effect of `clear_expired`, `len`, or `is_empty` - there is no
//! background task and no timer thread.
//!
//! Time is an injected capability ([`Clock`]), so expiration behavior is
//! fully deterministic under test with a [`ManualClock`].
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use aged_cache::{AgedCache, ManualClock};
//!
//! let clock = Arc::new(ManualClock::new(0));
//! let mut cache = AgedCache::with_clock(clock.clone());
//!
//! cache.put("a", "apple", 100);
//! assert_eq!(cache.get(&"a"), Some(&"apple"));
//!
//! clock.advance(100);
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.len(), 0);
//! ```

pub mod cache;
pub mod clock;

pub use cache::{AgedCache, CacheStats, TimedEntry};
pub use clock::{Clock, ManualClock, SystemClock};
