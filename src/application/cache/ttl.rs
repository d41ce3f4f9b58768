//! Thread-safe single-value cache with a fixed time-to-live.
//!
//! Expiry is the only invalidation trigger unless a caller explicitly
//! calls [`TtlCache::invalidate`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::port::Clock;

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// Memoized value that expires `ttl` after it was computed.
pub struct TtlCache<T> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: Mutex<Option<Entry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    /// Create an empty cache with an injected clock.
    #[must_use]
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value, computing and storing it if absent or expired.
    ///
    /// The lock is held while `compute` runs, so concurrent callers wait for
    /// one computation instead of racing. `compute` must not touch this cache.
    pub fn get_or_insert_with<F>(&self, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        let mut slot = self.slot.lock();
        let now = self.clock.now();
        if let Some(entry) = slot.as_ref().filter(|entry| self.is_live(entry, now)) {
            return entry.value.clone();
        }

        let value = compute();
        *slot = Some(Entry {
            value: value.clone(),
            stored_at: self.clock.now(),
        });
        value
    }

    /// Drop the cached value.
    pub fn invalidate(&self) {
        *self.slot.lock() = None;
    }

    /// True if a value is cached and unexpired.
    #[cfg(test)]
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        let now = self.clock.now();
        self.slot
            .lock()
            .as_ref()
            .is_some_and(|entry| self.is_live(entry, now))
    }

    fn is_live(&self, entry: &Entry<T>, now: Instant) -> bool {
        now.duration_since(entry.stored_at) < self.ttl
    }
}
