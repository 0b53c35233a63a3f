use reqwest::Client;
use serde_json::Value;

use crate::error::UpstreamError;

const API_NAME: &str = "coverart";

#[derive(Clone)]
pub struct CoverArtClient {
    client: Client,
    base_url: String,
}

impl CoverArtClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// The archive's payload shape varies by release, so the body is kept as
    /// opaque JSON. A 404 here is common: most releases have no artwork.
    pub async fn get_artwork(&self, album_id: &str) -> Result<Value, UpstreamError> {
        let url = format!(
            "{}/release/{}/",
            self.base_url,
            urlencoding::encode(album_id)
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
        let artwork: Value = serde_json::from_str(&body)?;

        Ok(artwork)
    }
}
