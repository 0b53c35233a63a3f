pub mod remote;

use std::future::Future;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::cache::store::CacheStore;
use crate::cache::{current_timestamp, is_fresh, keys};
use crate::error::{MusicError, UpstreamError};
use crate::models::{Album, SearchRequest};
use crate::music::remote::RemoteApi;

/// Total remote calls allowed per logical fetch, first try included.
pub const REQUEST_MAX_ATTEMPTS: u32 = 10;

pub struct Music {
    api: Arc<dyn RemoteApi>,
    store: Arc<dyn CacheStore>,
}

impl Music {
    pub fn new(api: Arc<dyn RemoteApi>, store: Arc<dyn CacheStore>) -> Self {
        Self { api, store }
    }

    /// Search for releases and enrich each with its artwork, keyed by album
    /// id. An absent list resolves to an empty mapping; absent artwork to a
    /// null field. Duplicate upstream ids resolve last-write-wins.
    pub async fn get_music_list(
        &self,
        request: &SearchRequest,
    ) -> Result<FxHashMap<String, Album>, MusicError> {
        let list_key = keys::list_key(request);
        let releases = self
            .fetch_with_policy(&list_key, || self.api.fetch_list(request))
            .await?
            .unwrap_or_default();

        let mut albums = FxHashMap::default();

        for release in releases {
            let artwork_key = keys::artwork_key(&release.id);
            let artwork = self
                .fetch_with_policy(&artwork_key, || self.api.fetch_artwork(&release.id))
                .await?;

            albums.insert(release.id.clone(), Album { release, artwork });
        }

        Ok(albums)
    }

    /// Cache-aside fetch with bounded retry and stale-cache fallback: a
    /// fresh cached value short-circuits, a success is written back, and
    /// failures branch on status. 400 is fatal, 404 resolves absent,
    /// anything else retries only while a cached value of any age exists.
    /// `Ok(None)` is the terminal absent outcome, never an error.
    pub async fn fetch_with_policy<T, F, Fut>(
        &self,
        key: &str,
        fetch: F,
    ) -> Result<Option<T>, MusicError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, UpstreamError>>,
    {
        let mut attempt = 1;

        loop {
            // Check cache first
            if let Some(value) = self.read_fresh(key).await {
                return Ok(Some(value));
            }

            // Cache miss or expired - fetch fresh data
            match fetch().await {
                Ok(value) => {
                    self.write_entry(key, &value).await?;
                    return Ok(Some(value));
                }
                Err(error) => match error.status() {
                    Some(400) => return Err(MusicError::BadRequest(error)),
                    Some(404) => return Ok(None),
                    _ => {
                        if attempt >= REQUEST_MAX_ATTEMPTS {
                            warn!(key, attempt, "retry cap reached, resolving absent");
                            return Ok(None);
                        }

                        // A cached value of any age means the data was
                        // retrievable once, so another attempt is worth it.
                        if !self.has_entry(key).await {
                            return Ok(None);
                        }

                        warn!(key, attempt, %error, "upstream failed, retrying");
                        attempt += 1;
                    }
                },
            }
        }
    }

    async fn read_fresh<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cached_at = self.store.get_timestamp(key).await?;
        if !is_fresh(cached_at, current_timestamp()) {
            return None;
        }

        let raw = self.store.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key, %error, "cached payload did not decode, treating as miss");
                None
            }
        }
    }

    async fn has_entry(&self, key: &str) -> bool {
        self.store.get(key).await.is_some()
    }

    async fn write_entry<T: Serialize>(&self, key: &str, value: &T) -> Result<(), MusicError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, raw).await;
        self.store.set_timestamp(key, current_timestamp()).await;

        Ok(())
    }
}
