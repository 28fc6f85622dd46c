mod common;

use serde_json::json;
use spotcollect::CatalogError;
use spotcollect::management::DatasetBuilder;
use spotcollect::types::{DatasetRow, EntityKind};

use common::*;

fn catalog() -> FakeTransport {
    FakeTransport::new()
        .with_json(&track_url("t1"), track_record("First", "a1", "Robyn"))
        .with_json(&track_url("t2"), track_record("Second", "a1", "Robyn"))
        .with_json(&track_url("t3"), track_record("Third", "a2", "Lykke Li"))
        .with_json(&artist_url("a1"), artist_record("Robyn"))
        .with_json(&artist_url("a2"), artist_record("Lykke Li"))
}

#[tokio::test]
async fn test_row_combines_track_and_first_artist() {
    let transport = catalog();
    let mut builder = DatasetBuilder::new(&transport);

    let row = builder.add_track("t1").await.unwrap().clone();
    assert_eq!(
        row,
        DatasetRow {
            track_id: "t1".to_string(),
            name: "First".to_string(),
            artist_id: "a1".to_string(),
            artist_name: "Robyn".to_string(),
            popularity: 64,
            duration_ms: 215_000,
            explicit: false,
            release_date: "2019-05-17".to_string(),
            available_markets_count: 3,
            artist_genres: vec!["indie pop".to_string(), "swedish pop".to_string()],
            artist_popularity: 71,
            artist_followers: 1_250_000,
        }
    );
}

#[tokio::test]
async fn test_shared_artist_is_fetched_once() {
    let transport = catalog();
    let mut builder = DatasetBuilder::new(&transport);

    for id in ["t1", "t2", "t3", "t1"] {
        builder.add_track(id).await.unwrap();
    }

    assert_eq!(builder.rows().len(), 4);
    assert_eq!(transport.request_count(&artist_url("a1")), 1);
    assert_eq!(transport.request_count(&track_url("t1")), 1);
    assert_eq!(builder.fetcher().cache().count(EntityKind::Track), 3);
    assert_eq!(builder.fetcher().cache().count(EntityKind::Artist), 2);
}

#[tokio::test]
async fn test_track_without_artists_is_rejected() {
    let transport = FakeTransport::new().with_json(
        &track_url("t1"),
        json!({ "name": "Lonely", "artists": [] }),
    );
    let mut builder = DatasetBuilder::new(&transport);

    let err = builder.add_track("t1").await.unwrap_err();
    assert!(matches!(err, CatalogError::MissingField { field: "artists" }));
    assert!(builder.rows().is_empty());
}

#[tokio::test]
async fn test_persist_writes_json_rows() {
    let transport = catalog();
    let mut builder = DatasetBuilder::new(&transport);
    builder.add_track("t3").await.unwrap();

    let path = temp_path("dataset.json");
    builder.persist(&path).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let rows: Vec<DatasetRow> = serde_json::from_str(&content).unwrap();
    assert_eq!(rows, builder.rows());
    assert_eq!(rows[0].artist_name, "Lykke Li");
}
