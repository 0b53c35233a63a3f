use crate::fixtures::{release, release_with, test_service, upstream_status};
use albumshelf::models::SearchRequest;
use serde_json::{Value, json};

#[tokio::test]
async fn search_returns_albums_keyed_by_id_with_artwork() {
    let svc = test_service();
    svc.api.push_list(Ok(vec![release("abc")]));
    svc.api.push_artwork(Ok(json!({"image": "url1"})));

    let albums = svc
        .music
        .get_music_list(&SearchRequest::new("Nevermind", 1))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&albums).unwrap(),
        json!({"abc": {"id": "abc", "artwork": {"image": "url1"}}})
    );
}

#[tokio::test]
async fn upstream_metadata_passes_through_untouched() {
    let svc = test_service();
    svc.api
        .push_list(Ok(vec![release_with("abc", "title", "Nevermind")]));
    svc.api.push_artwork(Ok(json!({"image": "url1"})));

    let albums = svc
        .music
        .get_music_list(&SearchRequest::new("Nevermind", 1))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&albums).unwrap(),
        json!({"abc": {"id": "abc", "title": "Nevermind", "artwork": {"image": "url1"}}})
    );
}

#[tokio::test]
async fn duplicate_ids_resolve_last_write_wins() {
    let svc = test_service();
    svc.api.push_list(Ok(vec![
        release_with("abc", "title", "first pressing"),
        release_with("abc", "title", "remaster"),
    ]));
    svc.api.push_artwork(Ok(json!({"image": "url1"})));

    let albums = svc
        .music
        .get_music_list(&SearchRequest::new("Nevermind", 2))
        .await
        .unwrap();

    assert_eq!(albums.len(), 1);
    assert_eq!(albums["abc"].release.metadata["title"], json!("remaster"));
    // The repeat lookup for the same id is served by the just-written entry.
    assert_eq!(svc.api.artwork_call_count(), 1);
}

#[tokio::test]
async fn artwork_lookups_follow_list_order() {
    let svc = test_service();
    svc.api
        .push_list(Ok(vec![release("first"), release("second")]));
    svc.api.push_artwork(Ok(json!({"image": "first-cover"})));
    svc.api.push_artwork(Ok(json!({"image": "second-cover"})));

    let albums = svc
        .music
        .get_music_list(&SearchRequest::new("double album", 2))
        .await
        .unwrap();

    assert_eq!(albums["first"].artwork, Some(json!({"image": "first-cover"})));
    assert_eq!(
        albums["second"].artwork,
        Some(json!({"image": "second-cover"}))
    );
}

#[tokio::test]
async fn missing_list_yields_an_empty_mapping() {
    let svc = test_service();
    svc.api.push_list(Err(upstream_status("musicbrainz", 404)));

    let albums = svc
        .music
        .get_music_list(&SearchRequest::new("no such album", 1))
        .await
        .unwrap();

    assert!(albums.is_empty());
    assert_eq!(svc.api.list_call_count(), 1);
    assert_eq!(svc.api.artwork_call_count(), 0);
}

#[tokio::test]
async fn albums_without_artwork_still_appear_with_null() {
    let svc = test_service();
    svc.api
        .push_list(Ok(vec![release("with-art"), release("without-art")]));
    svc.api.push_artwork(Ok(json!({"image": "url1"})));
    svc.api.push_artwork(Err(upstream_status("coverart", 404)));

    let albums = svc
        .music
        .get_music_list(&SearchRequest::new("mixed", 2))
        .await
        .unwrap();

    assert_eq!(albums.len(), 2);
    assert_eq!(albums["with-art"].artwork, Some(json!({"image": "url1"})));
    assert_eq!(albums["without-art"].artwork, None);

    let as_json = serde_json::to_value(&albums).unwrap();
    assert_eq!(as_json["without-art"]["artwork"], Value::Null);
}
