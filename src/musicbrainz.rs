use reqwest::Client;
use serde::Deserialize;

use crate::error::UpstreamError;
use crate::models::{Release, SearchRequest};

const API_NAME: &str = "musicbrainz";

#[derive(Deserialize)]
struct ReleaseSearchResponse {
    #[serde(default)]
    releases: Vec<Release>,
}

#[derive(Clone)]
pub struct MusicBrainzClient {
    client: Client,
    base_url: String,
}

impl MusicBrainzClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn search_releases(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Release>, UpstreamError> {
        let url = format!(
            "{}/ws/2/release/?query={}&limit={}&fmt=json",
            self.base_url,
            urlencoding::encode(&request.query),
            request.limit
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(UpstreamError::Status {
                api: API_NAME,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: ReleaseSearchResponse = serde_json::from_str(&body)?;

        Ok(parsed.releases)
    }
}
