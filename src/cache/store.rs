use async_trait::async_trait;
use moka::future::Cache;

use crate::cache::keys;

/// Key-value store holding serialized payloads and their cached-at stamps.
/// Timestamp operations take the value key; the paired stamp key is an
/// implementation detail.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: String);
    async fn get_timestamp(&self, key: &str) -> Option<i64>;
    async fn set_timestamp(&self, key: &str, cached_at: i64);
    async fn clear(&self);
}

pub struct MemoryStore {
    entries: Cache<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        // No eviction: expired entries must stay readable so the retry path
        // can use them as stale fallbacks. Freshness is the caller's call.
        Self {
            entries: Cache::builder().build(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).await
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value).await;
    }

    async fn get_timestamp(&self, key: &str) -> Option<i64> {
        let stamp = self.entries.get(&keys::timestamp_key(key)).await?;
        stamp.parse().ok()
    }

    async fn set_timestamp(&self, key: &str, cached_at: i64) {
        self.entries
            .insert(keys::timestamp_key(key), cached_at.to_string())
            .await;
    }

    async fn clear(&self) {
        self.entries.invalidate_all();
    }
}
