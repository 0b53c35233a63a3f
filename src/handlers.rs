use axum::{
    Json,
    extract::{Query, State},
};
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::cache::store::CacheStore;
use crate::error::MusicError;
use crate::models::{Album, FlushResponse, HealthResponse, MusicQuery, SearchRequest};
use crate::state::AppState;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Albumshelf API is running".to_string(),
    })
}

pub async fn music_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MusicQuery>,
) -> Result<Json<FxHashMap<String, Album>>, MusicError> {
    let request = SearchRequest::new(params.query, params.limit);
    let albums = state.music.get_music_list(&request).await?;

    Ok(Json(albums))
}

pub async fn flush_cache(State(state): State<Arc<AppState>>) -> Json<FlushResponse> {
    state.store.clear().await;

    Json(FlushResponse {
        status: "ok".to_string(),
        message: "Cache flushed".to_string(),
    })
}
