use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::models::SearchRequest;

const LIST_PREFIX: &str = "/music/list/";
const ARTWORK_PREFIX: &str = "/music/artwork/";
const CREATED_AT_SUFFIX: &str = "/created_at";

pub fn list_key(request: &SearchRequest) -> String {
    let limit = request.limit.to_string();
    let canonical = canonical_query(&[("limit", &limit), ("query", &request.query)]);

    format!("{}{}", LIST_PREFIX, STANDARD.encode(canonical))
}

/// Percent-encoding the id keeps ids containing `/` out of the stamp
/// namespace.
pub fn artwork_key(album_id: &str) -> String {
    format!("{}{}", ARTWORK_PREFIX, urlencoding::encode(album_id))
}

pub fn timestamp_key(value_key: &str) -> String {
    format!("{}{}", value_key, CREATED_AT_SUFFIX)
}

fn canonical_query(params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<_> = params.to_vec();
    pairs.sort_by_key(|(name, _)| *name);

    pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
