//! Cache Entry Module
//!
//! Defines the immutable record pairing a stored value with its admission
//! timestamp and retention period.

// == Timed Entry ==
/// A single cache entry: a value plus the timestamps that bound its life.
///
/// Immutable after construction. `admitted_at` and `retention_ms` are set
/// exactly once, at insertion time.
#[derive(Debug, Clone)]
pub struct TimedEntry<V> {
    /// Admission timestamp (milliseconds since the Unix epoch)
    admitted_at: i64,
    /// Retention period in milliseconds; zero or negative means the entry
    /// is expired on the next liveness check
    retention_ms: i64,
    /// The stored value
    value: V,
}

impl<V> TimedEntry<V> {
    // == Constructor ==
    /// Creates an entry admitted at `admitted_at` that stays live for
    /// `retention_ms` milliseconds.
    ///
    /// Construction cannot fail: any retention value is accepted, including
    /// zero and negative ones.
    pub fn new(admitted_at: i64, retention_ms: i64, value: V) -> Self {
        Self {
            admitted_at,
            retention_ms,
            value,
        }
    }

    // == Accessors ==
    /// Returns a reference to the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the admission timestamp in milliseconds.
    pub fn admitted_at(&self) -> i64 {
        self.admitted_at
    }

    /// Returns the retention period in milliseconds.
    pub fn retention_ms(&self) -> i64 {
        self.retention_ms
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now_millis`.
    ///
    /// Boundary condition: an entry is expired once its elapsed age is
    /// greater than or equal to its retention period. Retention is an
    /// exclusive upper bound on liveness - "live" means elapsed strictly
    /// less than retention.
    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis - self.admitted_at >= self.retention_ms
    }

    // == Remaining Retention ==
    /// Returns the remaining live time in milliseconds as of `now_millis`,
    /// clamped to zero once expired.
    pub fn remaining_ms(&self, now_millis: i64) -> i64 {
        let deadline = self.admitted_at + self.retention_ms;
        if deadline > now_millis {
            deadline - now_millis
        } else {
            0
        }
    }

    // == Into Value ==
    /// Consumes the entry, yielding the stored value.
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}
