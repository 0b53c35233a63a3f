use async_trait::async_trait;
use serde_json::Value;

use crate::coverart::CoverArtClient;
use crate::error::UpstreamError;
use crate::models::{Release, SearchRequest};
use crate::musicbrainz::MusicBrainzClient;

/// The two remote calls the aggregator makes. Failures carry the upstream
/// HTTP status when there is one, which is what the retry policy branches on.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn fetch_list(&self, request: &SearchRequest) -> Result<Vec<Release>, UpstreamError>;
    async fn fetch_artwork(&self, album_id: &str) -> Result<Value, UpstreamError>;
}

pub struct HttpRemoteApi {
    musicbrainz: MusicBrainzClient,
    coverart: CoverArtClient,
}

impl HttpRemoteApi {
    pub fn new(musicbrainz: MusicBrainzClient, coverart: CoverArtClient) -> Self {
        Self {
            musicbrainz,
            coverart,
        }
    }
}

#[async_trait]
impl RemoteApi for HttpRemoteApi {
    async fn fetch_list(&self, request: &SearchRequest) -> Result<Vec<Release>, UpstreamError> {
        self.musicbrainz.search_releases(request).await
    }

    async fn fetch_artwork(&self, album_id: &str) -> Result<Value, UpstreamError> {
        self.coverart.get_artwork(album_id).await
    }
}
