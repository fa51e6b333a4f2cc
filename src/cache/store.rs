//! Response cache storage.
//!
//! Caches serialized HTTP responses for public routes, with LRU eviction and
//! a TTL safety net for invalidations that never arrive.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use bytes::Bytes;
use lru::LruCache;
use metrics::counter;

use super::config::CacheConfig;
use super::keys::ResponseKey;
use super::lock::{read_guard, write_guard};

const SOURCE: &str = "cache::store";

const METRIC_CACHE_HIT: &str = "vitrine_cache_hit_total";
const METRIC_CACHE_MISS: &str = "vitrine_cache_miss_total";
const METRIC_CACHE_EXPIRED: &str = "vitrine_cache_expired_total";

/// Cached HTTP response.
#[derive(Clone)]
pub struct CachedResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
    pub stored_at: Instant,
}

/// Response cache storage.
pub struct ResponseStore {
    responses: RwLock<LruCache<ResponseKey, CachedResponse>>,
    ttl: Duration,
}

impl ResponseStore {
    /// Create a new response store with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            responses: RwLock::new(LruCache::new(config.response_limit_non_zero())),
            ttl: config.response_ttl(),
        }
    }

    /// Look up a cached response, dropping it if its TTL has elapsed.
    pub fn get(&self, key: &ResponseKey) -> Option<CachedResponse> {
        let mut responses = write_guard(&self.responses, SOURCE, "get");

        match responses.get(key) {
            Some(cached) if cached.stored_at.elapsed() < self.ttl => {
                counter!(METRIC_CACHE_HIT).increment(1);
                Some(cached.clone())
            }
            Some(_) => {
                responses.pop(key);
                counter!(METRIC_CACHE_EXPIRED).increment(1);
                None
            }
            None => {
                counter!(METRIC_CACHE_MISS).increment(1);
                None
            }
        }
    }

    /// Store a response. Returns the key evicted to make room, if any.
    pub fn set(&self, key: ResponseKey, response: CachedResponse) -> Option<ResponseKey> {
        write_guard(&self.responses, SOURCE, "set")
            .push(key, response)
            .map(|(evicted_key, _)| evicted_key)
    }

    pub fn invalidate(&self, key: &ResponseKey) {
        write_guard(&self.responses, SOURCE, "invalidate").pop(key);
    }

    pub fn invalidate_all(&self) {
        write_guard(&self.responses, SOURCE, "invalidate_all").clear();
    }

    /// Get the number of cached responses.
    pub fn len(&self) -> usize {
        read_guard(&self.responses, SOURCE, "len").len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    fn sample_response(body: &str) -> CachedResponse {
        CachedResponse {
            status: 200,
            headers: vec![(
                "content-type".to_string(),
                "application/json".to_string(),
            )],
            body: Bytes::from(body.to_string()),
            stored_at: Instant::now(),
        }
    }

    #[test]
    fn response_cache_roundtrip() {
        let config = CacheConfig::default();
        let store = ResponseStore::new(&config);

        let key = ResponseKey::new("/blog/hello", "");

        assert!(store.get(&key).is_none());

        let evicted = store.set(key.clone(), sample_response("{\"ok\":true}"));
        assert!(evicted.is_none());

        let cached = store.get(&key).expect("cached response");
        assert_eq!(cached.status, 200);
        assert_eq!(cached.body, Bytes::from("{\"ok\":true}"));

        store.invalidate(&key);
        assert!(store.get(&key).is_none());
    }

    #[test]
    fn lru_eviction_reports_evicted_key() {
        let config = CacheConfig {
            response_limit: 2,
            ..Default::default()
        };
        let store = ResponseStore::new(&config);

        let first = ResponseKey::new("/", "");
        let second = ResponseKey::new("/blog", "");
        let third = ResponseKey::new("/gallery", "");

        assert!(store.set(first.clone(), sample_response("a")).is_none());
        assert!(store.set(second.clone(), sample_response("b")).is_none());

        let evicted = store.set(third.clone(), sample_response("c"));
        assert_eq!(evicted, Some(first.clone()));

        assert!(store.get(&first).is_none());
        assert!(store.get(&second).is_some());
        assert!(store.get(&third).is_some());
    }

    #[test]
    fn expired_entries_are_dropped_on_read() {
        let config = CacheConfig {
            response_ttl_secs: 60,
            ..Default::default()
        };
        let store = ResponseStore::new(&config);

        let key = ResponseKey::new("/blog", "");
        let mut response = sample_response("stale");
        response.stored_at = Instant::now() - Duration::from_secs(120);
        store.set(key.clone(), response);

        assert!(store.get(&key).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn invalidate_all_clears_everything() {
        let config = CacheConfig::default();
        let store = ResponseStore::new(&config);

        store.set(ResponseKey::new("/", ""), sample_response("a"));
        store.set(ResponseKey::new("/blog", ""), sample_response("b"));
        assert_eq!(store.len(), 2);

        store.invalidate_all();
        assert!(store.is_empty());
    }

    #[test]
    fn store_recovers_from_poisoned_lock() {
        let config = CacheConfig::default();
        let store = ResponseStore::new(&config);

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = store
                .responses
                .write()
                .expect("responses lock should be acquired");
            panic!("poison responses lock");
        }));

        store.set(ResponseKey::new("/", ""), sample_response("ok"));
        assert_eq!(store.len(), 1);
    }
}
