//! In-memory TTL cache - the only backend this service needs, since the
//! datasets are small and fixed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use cms_core::ports::{Cache, CacheError, CacheStats};

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

/// In-memory cache using a HashMap behind an async RwLock.
///
/// Eviction is lazy: an expired entry is removed the next time it is read.
/// There is no background sweeper and no capacity bound. Concurrent
/// requests racing to populate the same key resolve last-writer-wins.
pub struct InMemoryCache {
    store: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn is_expired(entry: &CacheEntry) -> bool {
        entry
            .expires_at
            .map(|exp| Instant::now() >= exp)
            .unwrap_or(false)
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        let entry = store.get(key)?;

        if Self::is_expired(entry) {
            drop(store);
            // Evict the stale entry under the write lock.
            let mut store = self.store.write().await;
            store.remove(key);
            return None;
        }

        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut store = self.store.write().await;

        let expires_at = ttl.map(|d| Instant::now() + d);

        store.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at,
            },
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }

    async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
    }

    async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        CacheStats {
            entries: store.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        assert_eq!(cache.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "value1", Some(Duration::from_millis(20)))
            .await
            .unwrap();
        assert!(cache.get("key1").await.is_some());

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get("key1").await, None);
        // Lazy eviction removed the entry on that read.
        assert_eq!(cache.stats().await.entries, 0);
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let cache = InMemoryCache::new();
        cache.set("a", "1", None).await.unwrap();
        cache.set("b", "2", None).await.unwrap();
        assert_eq!(cache.stats().await.entries, 2);

        cache.clear().await;
        assert_eq!(cache.stats().await.entries, 0);
        assert_eq!(cache.get("a").await, None);
    }

    #[tokio::test]
    async fn delete_removes_a_single_key() {
        let cache = InMemoryCache::new();
        cache.set("a", "1", None).await.unwrap();
        cache.set("b", "2", None).await.unwrap();
        cache.delete("a").await.unwrap();
        assert_eq!(cache.get("a").await, None);
        assert_eq!(cache.get("b").await, Some("2".to_string()));
    }
}
