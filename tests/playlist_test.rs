mod common;

use std::collections::HashSet;

use spotcollect::CatalogError;
use spotcollect::spotify::playlist::{PlaylistPages, walk};

use common::*;

const SECOND_PAGE: &str = "https://api.test/v1/playlists/p1/tracks?offset=100&limit=100";

fn two_page_playlist() -> FakeTransport {
    FakeTransport::new()
        .with_json(
            &playlist_url("p1"),
            page(
                vec![null_item(), local_item("local-1"), track_item("A")],
                Some(SECOND_PAGE),
            ),
        )
        .with_json(
            SECOND_PAGE,
            page(vec![track_item("A"), track_item("B")], None),
        )
}

fn set(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_walk_skips_null_local_and_duplicate_tracks() {
    let transport = two_page_playlist();
    let ids = walk(&transport, "p1").await.unwrap();
    assert_eq!(ids, set(&["A", "B"]));
}

#[tokio::test]
async fn test_walk_follows_next_url_verbatim() {
    let transport = two_page_playlist();
    walk(&transport, "p1").await.unwrap();

    // the page size is only attached to the first request
    assert_eq!(
        transport.requests(),
        vec![playlist_url("p1"), SECOND_PAGE.to_string()]
    );
}

#[tokio::test]
async fn test_walk_skips_tracks_without_id() {
    let transport = FakeTransport::new().with_json(
        &playlist_url("p1"),
        page(vec![missing_id_item(), track_item(""), track_item("C")], None),
    );
    assert_eq!(walk(&transport, "p1").await.unwrap(), set(&["C"]));
}

#[tokio::test]
async fn test_walk_stops_on_null_next_with_no_eligible_tracks() {
    let transport = FakeTransport::new().with_json(
        &playlist_url("p1"),
        page(vec![null_item(), local_item("x")], None),
    );

    let ids = walk(&transport, "p1").await.unwrap();
    assert!(ids.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_walk_empty_playlist() {
    let transport = FakeTransport::new().with_json(&playlist_url("p1"), page(vec![], None));
    assert!(walk(&transport, "p1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_walk_fails_on_page_error() {
    let transport = FakeTransport::new()
        .with_json(&playlist_url("p1"), page(vec![track_item("A")], Some(SECOND_PAGE)))
        .with_status(SECOND_PAGE, 500);

    let err = walk(&transport, "p1").await.unwrap_err();
    assert!(matches!(err, CatalogError::Remote { status: 500, .. }));
}

#[tokio::test]
async fn test_walk_fails_on_unknown_playlist() {
    let transport = FakeTransport::new().with_status(&playlist_url("missing"), 404);
    let err = walk(&transport, "missing").await.unwrap_err();
    assert!(matches!(err, CatalogError::Remote { status: 404, .. }));
}

#[tokio::test]
async fn test_pages_are_lazy_and_restartable() {
    let transport = two_page_playlist();

    let mut pages = PlaylistPages::new(&transport, "p1");
    assert!(transport.requests().is_empty());

    let first = pages.next_page().await.unwrap().unwrap();
    assert_eq!(first.track_ids().collect::<Vec<_>>(), vec!["A"]);
    assert_eq!(first.next.as_deref(), Some(SECOND_PAGE));

    let second = pages.next_page().await.unwrap().unwrap();
    assert_eq!(second.track_ids().collect::<Vec<_>>(), vec!["A", "B"]);
    assert!(pages.next_page().await.unwrap().is_none());
    assert_eq!(transport.requests().len(), 2);

    let mut again = PlaylistPages::new(&transport, "p1");
    assert!(again.next_page().await.unwrap().is_some());
    assert_eq!(transport.request_count(&playlist_url("p1")), 2);
}
