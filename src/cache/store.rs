// In-memory response store.
// Memoizes resolved calls by fingerprint, with a size bound and optional TTL.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::CacheConfig;
use crate::error::{ErrorKind, Result, SteamError};
use crate::steam::Payload;

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Check if this cached data has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        let elapsed = Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::ZERO);

        elapsed > ttl
    }
}

/// What a memoized call resolved to.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success(Payload),
    Failure { kind: ErrorKind, message: String },
}

impl Outcome {
    pub fn failure(err: &SteamError) -> Self {
        Outcome::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Replay as a call result. Failures come back as `SteamError::Replayed`.
    pub fn into_result(self) -> Result<Payload> {
        match self {
            Outcome::Success(payload) => Ok(payload),
            Outcome::Failure { kind, message } => Err(SteamError::Replayed { kind, message }),
        }
    }
}

/// Counters for cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub evictions: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CachedData<Outcome>>,
    /// Fingerprints in insertion order, oldest first.
    order: VecDeque<String>,
    stats: CacheStats,
}

impl Inner {
    fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.order.retain(|k| k != key);
        }
        removed
    }

    fn evict_oldest(&mut self) -> bool {
        while let Some(oldest) = self.order.pop_front() {
            if self.entries.remove(&oldest).is_some() {
                self.stats.evictions += 1;
                return true;
            }
        }
        false
    }
}

/// Memoizing store owned by one client.
///
/// The lock is held only for map access, never across a fetch, so two
/// concurrent misses on the same fingerprint both go upstream.
#[derive(Debug)]
pub struct ResponseCache {
    inner: Mutex<Inner>,
    max_entries: usize,
    ttl: Option<Duration>,
}

impl ResponseCache {
    pub fn new(max_entries: usize, ttl: Option<Duration>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            max_entries,
            ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, config.ttl)
    }

    /// Look up a fingerprint. Expired entries are dropped and count as misses.
    pub fn get(&self, key: &str) -> Option<Outcome> {
        let mut inner = self.inner.lock();

        let expired = match (inner.entries.get(key), self.ttl) {
            (Some(entry), Some(ttl)) => entry.is_expired(ttl),
            _ => false,
        };
        if expired {
            inner.remove(key);
        }

        let found = inner.entries.get(key).map(|entry| entry.data.clone());
        match found {
            Some(outcome) => {
                inner.stats.hits += 1;
                Some(outcome)
            }
            None => {
                inner.stats.misses += 1;
                None
            }
        }
    }

    /// Store an outcome, evicting the oldest entry when full.
    pub fn insert(&self, key: String, outcome: Outcome) {
        if self.max_entries == 0 {
            return;
        }

        let mut inner = self.inner.lock();
        inner.remove(&key);
        while inner.entries.len() >= self.max_entries && inner.evict_oldest() {}
        inner.order.push_back(key.clone());
        inner.entries.insert(key, CachedData::new(outcome));
        inner.stats.inserts += 1;
    }

    /// Drop one fingerprint. Returns whether it was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().entries.contains_key(key)
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.entries.len(),
            ..inner.stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success(n: i64) -> Outcome {
        Outcome::Success(Payload::Json(json!(n)))
    }

    fn value(outcome: Option<Outcome>) -> Option<Payload> {
        outcome.and_then(|o| o.into_result().ok())
    }

    #[test]
    fn test_get_after_insert() {
        let cache = ResponseCache::new(8, None);
        assert!(cache.get("a").is_none());

        cache.insert("a".to_string(), success(1));
        assert_eq!(value(cache.get("a")), Some(Payload::Json(json!(1))));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_bounded_evicts_oldest() {
        let cache = ResponseCache::new(2, None);
        cache.insert("a".to_string(), success(1));
        cache.insert("b".to_string(), success(2));
        cache.insert("c".to_string(), success(3));

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_reinsert_refreshes_position() {
        let cache = ResponseCache::new(2, None);
        cache.insert("a".to_string(), success(1));
        cache.insert("b".to_string(), success(2));
        cache.insert("a".to_string(), success(10));
        cache.insert("c".to_string(), success(3));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert_eq!(value(cache.get("a")), Some(Payload::Json(json!(10))));
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = ResponseCache::new(0, None);
        cache.insert("a".to_string(), success(1));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_ttl_expiry() {
        let cache = ResponseCache::new(8, Some(Duration::from_secs(300)));
        cache.insert("fresh".to_string(), success(1));
        cache.insert("stale".to_string(), success(2));

        // Backdate one entry past the TTL
        cache
            .inner
            .lock()
            .entries
            .get_mut("stale")
            .unwrap()
            .cached_at = Utc::now() - chrono::Duration::seconds(600);

        assert!(cache.get("fresh").is_some());
        assert!(cache.get("stale").is_none());
        assert!(!cache.contains("stale"));
    }

    #[test]
    fn test_cached_data_expiry() {
        let mut data = CachedData::new("test");
        assert!(!data.is_expired(Duration::from_secs(300)));

        data.cached_at = Utc::now() - chrono::Duration::seconds(600);
        assert!(data.is_expired(Duration::from_secs(300)));
    }

    #[test]
    fn test_failure_replay() {
        let err = SteamError::UnsupportedFormat("yaml".to_string());
        let replayed = Outcome::failure(&err).into_result().unwrap_err();
        assert!(replayed.is_replayed());
        assert_eq!(replayed.kind(), ErrorKind::UnsupportedFormat);
        assert!(replayed.to_string().contains("yaml"));
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache = ResponseCache::new(8, None);
        cache.insert("a".to_string(), success(1));
        cache.insert("b".to_string(), success(2));

        assert!(cache.invalidate("a"));
        assert!(!cache.invalidate("a"));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }
}
