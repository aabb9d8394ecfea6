//! In-memory TTL cache for catalog responses.
//!
//! Entries are replaced on refresh and only dropped lazily: an expired entry
//! stays in the map until the next successful fetch for its key overwrites
//! it. There is no capacity bound. A TTL too large to add to the current
//! instant means the entry never expires.
//!
//! The lock is held only for the map access. Callers never hold it across an
//! `.await`, which also means two concurrent misses for one key both fetch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// A cached value with its absolute expiry (`None` never expires)
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub expires_at: Option<Instant>,
}

impl<T> CacheEntry<T> {
    /// Whether the entry is still valid at `now`
    pub fn is_fresh(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// Keyed cache with a fixed TTL
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Get a fresh value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str, now: Instant) -> Option<T> {
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` under `key`, expiring `ttl` after `now`.
    ///
    /// Overwrites any previous entry, fresh or not.
    pub fn insert(&self, key: String, value: T, now: Instant) {
        let entry = CacheEntry {
            value,
            expires_at: now.checked_add(self.ttl),
        };
        self.entries.lock().insert(key, entry);
    }

    /// Number of stored entries (including expired ones not yet replaced)
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Build a cache key from an operation name and its parameters.
///
/// Every part is trimmed and lower-cased, so `"Adele"` and `" adele "` share
/// an entry. Parts are percent-encoded so a `:` inside a search term can't
/// shift segment boundaries. The operation name is the first segment, which
/// keeps keys of different operations apart.
pub fn cache_key(operation: &str, parts: &[&str]) -> String {
    let mut key = operation.to_string();
    for part in parts {
        key.push(':');
        key.push_str(&urlencoding::encode(&part.trim().to_lowercase()));
    }
    key
}
