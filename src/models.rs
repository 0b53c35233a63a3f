use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct FlushResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct MusicQuery {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

/// Canonical search parameters. Equal (query, limit) pairs map to the same
/// cache fingerprint.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub limit: u32,
}

impl SearchRequest {
    /// A zero limit falls back to the default, so it fingerprints the same
    /// as an omitted one.
    pub fn new(query: impl Into<String>, limit: u32) -> Self {
        Self {
            query: query.into(),
            limit: if limit == 0 { default_limit() } else { limit },
        }
    }
}

/// One album record as the metadata API returns it. Only the id is
/// interpreted; everything else passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    #[serde(flatten)]
    pub metadata: FxHashMap<String, Value>,
}

/// A release enriched with its artwork lookup. `artwork` is null when the
/// lookup terminally resolved to nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    #[serde(flatten)]
    pub release: Release,
    pub artwork: Option<Value>,
}
