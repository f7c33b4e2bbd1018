//! Cache Store Module
//!
//! The aged cache engine: a HashMap of timed entries plus an injected clock,
//! with lazy expiry sweeps on `clear_expired`, `len`, and `is_empty`.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::cache::{CacheStats, TimedEntry};
use crate::clock::{Clock, SystemClock};

// == Aged Cache ==
/// Key/value cache whose entries each carry an individual retention period.
///
/// Liveness is decided against the injected [`Clock`] at call time; expired
/// entries are removed lazily, never by a background task. `len` and
/// `is_empty` sweep expired entries first so they only ever report live
/// ones. `get` checks liveness but deliberately leaves stale entries in
/// place; they linger until the next sweeping call or an overwrite.
///
/// Single-owner access is assumed: there is no internal locking. Callers
/// needing shared mutation should wrap the cache in a mutex themselves.
pub struct AgedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, TimedEntry<V>>,
    /// Time source consulted once per public operation
    clock: Arc<dyn Clock>,
    /// Activity counters
    stats: CacheStats,
}

impl<K, V> AgedCache<K, V>
where
    K: Eq + Hash,
{
    // == Constructors ==
    /// Creates an empty cache bound to the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cache using the supplied time source.
    ///
    /// The clock must be monotonic for correctness; a test clock is expected
    /// to produce non-decreasing values across calls.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Inserts a value with the given retention period in milliseconds,
    /// unconditionally overwriting any existing entry for the key.
    ///
    /// The entry is stamped with the clock's current time. Any retention
    /// value is accepted; zero or negative retention yields an entry that is
    /// expired on its next liveness check.
    pub fn put(&mut self, key: K, value: V, retention_ms: i64) {
        let now = self.clock.now_millis();
        self.entries
            .insert(key, TimedEntry::new(now, retention_ms, value));
        self.stats.set_total_entries(self.entries.len());
        trace!(retention_ms, "entry admitted");
    }

    // == Get ==
    /// Returns the value for `key` if present and still live, otherwise
    /// `None`.
    ///
    /// A stale entry reads as absent but is NOT removed here; removal
    /// happens only in the sweeping operations. Missing and expired keys
    /// both count as misses.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.clock.now_millis();
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.stats.record_hit();
                Some(entry.value())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear Expired ==
    /// Removes every entry whose elapsed age has reached its retention
    /// period. Returns the number of entries removed.
    ///
    /// This is the single eviction mechanism. Retain-if-live semantics keep
    /// the scan safe: no removal happens while a borrowed view is iterated.
    pub fn clear_expired(&mut self) -> usize {
        let now = self.clock.now_millis();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.entries.len();

        self.stats.record_evictions(removed);
        self.stats.set_total_entries(self.entries.len());
        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "expiry sweep");
        }
        removed
    }

    // == Length ==
    /// Sweeps expired entries, then returns the count of live ones.
    pub fn len(&mut self) -> usize {
        self.clear_expired();
        self.entries.len()
    }

    // == Is Empty ==
    /// Sweeps expired entries, then reports whether any live ones remain.
    pub fn is_empty(&mut self) -> bool {
        self.clear_expired();
        self.entries.is_empty()
    }

    // == Remove ==
    /// Removes an entry by key, returning its value if one was physically
    /// present - even a stale one that `get` would no longer report.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.entries.remove(key).map(TimedEntry::into_value);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    ///
    /// `total_entries` is the physical count, so a stale entry that `get`
    /// already reported absent still shows up here until the next sweep.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

impl<K, V> Default for AgedCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
