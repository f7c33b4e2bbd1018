//! Cache Module
//!
//! Provides the aged key/value store with lazy retention-based expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::TimedEntry;
pub use stats::CacheStats;
pub use store::AgedCache;
