use std::sync::Arc;

use reqwest::Client;

use crate::cache::store::{CacheStore, MemoryStore};
use crate::config::Config;
use crate::coverart::CoverArtClient;
use crate::music::Music;
use crate::music::remote::{HttpRemoteApi, RemoteApi};
use crate::musicbrainz::MusicBrainzClient;

pub struct AppState {
    pub music: Music,
    pub store: Arc<dyn CacheStore>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::builder().user_agent(config.user_agent).build()?;

        let musicbrainz = MusicBrainzClient::new(client.clone(), config.musicbrainz_url);
        let coverart = CoverArtClient::new(client, config.coverart_url);

        let api: Arc<dyn RemoteApi> = Arc::new(HttpRemoteApi::new(musicbrainz, coverart));
        let store: Arc<dyn CacheStore> = Arc::new(MemoryStore::new());

        Ok(Self {
            music: Music::new(api, Arc::clone(&store)),
            store,
        })
    }
}
