mod common;

use spotcollect::CatalogError;
use spotcollect::spotify::entities::EntityFetcher;
use spotcollect::types::EntityKind;

use common::*;

#[tokio::test]
async fn test_fetch_twice_issues_one_request() {
    let transport = FakeTransport::new().with_json(&track_url("t1"), track_record("Song", "a1", "Artist"));
    let mut fetcher = EntityFetcher::new(&transport);

    let first = fetcher.fetch(EntityKind::Track, "t1").await.unwrap().clone();
    let second = fetcher.fetch(EntityKind::Track, "t1").await.unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(transport.request_count(&track_url("t1")), 1);
    assert_eq!(fetcher.cache().count(EntityKind::Track), 1);
}

#[tokio::test]
async fn test_fetch_uses_kind_specific_endpoint() {
    let transport = FakeTransport::new()
        .with_json(&track_url("same-id"), track_record("Song", "a1", "Artist"))
        .with_json(&artist_url("same-id"), artist_record("Artist"));
    let mut fetcher = EntityFetcher::new(&transport);

    let track_name = fetcher.track("same-id").await.unwrap()["name"].clone();
    let artist_name = fetcher.artist("same-id").await.unwrap()["name"].clone();

    assert_eq!(track_name, "Song");
    assert_eq!(artist_name, "Artist");
    assert_eq!(
        transport.requests(),
        vec![track_url("same-id"), artist_url("same-id")]
    );
    assert!(fetcher.cache().contains(EntityKind::Track, "same-id"));
    assert!(fetcher.cache().contains(EntityKind::Artist, "same-id"));
}

#[tokio::test]
async fn test_fetch_error_is_not_cached() {
    let transport = FakeTransport::new().with_status(&artist_url("gone"), 404);
    let mut fetcher = EntityFetcher::new(&transport);

    let err = fetcher.artist("gone").await.unwrap_err();
    assert!(matches!(err, CatalogError::Remote { status: 404, .. }));
    assert!(fetcher.artist("gone").await.is_err());

    assert_eq!(transport.request_count(&artist_url("gone")), 2);
    assert_eq!(fetcher.cache().count(EntityKind::Artist), 0);
}

#[tokio::test]
async fn test_fresh_fetcher_has_empty_cache() {
    let transport = FakeTransport::new().with_json(&artist_url("a1"), artist_record("Artist"));

    let mut fetcher = EntityFetcher::new(&transport);
    fetcher.artist("a1").await.unwrap();

    let mut other = EntityFetcher::new(&transport);
    assert_eq!(other.cache().count(EntityKind::Artist), 0);
    other.artist("a1").await.unwrap();

    assert_eq!(transport.request_count(&artist_url("a1")), 2);
}
