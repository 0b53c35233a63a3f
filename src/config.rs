use crate::error::ConfigError;

const DEFAULT_MUSICBRAINZ_URL: &str = "http://musicbrainz.org";
const DEFAULT_COVERART_URL: &str = "http://coverartarchive.org";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub musicbrainz_url: String,
    pub coverart_url: String,
    pub addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // MusicBrainz refuses clients without an identifying user agent.
        let user_agent = std::env::var("MUSICBRAINZ_USER_AGENT")
            .map_err(|_| ConfigError::MissingVar("MUSICBRAINZ_USER_AGENT"))?;

        let musicbrainz_url = std::env::var("MUSICBRAINZ_URL")
            .unwrap_or_else(|_| DEFAULT_MUSICBRAINZ_URL.to_string());
        let coverart_url =
            std::env::var("COVERART_URL").unwrap_or_else(|_| DEFAULT_COVERART_URL.to_string());
        let addr = std::env::var("ALBUMSHELF_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        Ok(Self {
            user_agent,
            musicbrainz_url,
            coverart_url,
            addr,
        })
    }
}
