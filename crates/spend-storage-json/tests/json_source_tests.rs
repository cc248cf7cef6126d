use std::fs;

use spend_core::{storage::SnapshotSource, CoreError, Dashboard};
use spend_domain::MetricType;
use spend_storage_json::{parse_snapshot, JsonSnapshotSource};
use tempfile::tempdir;

const DOCUMENT: &str = r#"{
  "users": [
    {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com", "role": "Analyst"},
    {"id": 2, "name": "Grace Hopper", "email": "grace@example.com", "role": "Manager"}
  ],
  "data": [
    {
      "userId": 1,
      "items": [
        {
          "country": "USA", "state": "California", "city": "San Diego",
          "sector": "Retail", "category": "Electronics",
          "startDate": "2024-01-01", "endDate": "2024-01-31",
          "mySpend": {"current": 100, "reference": 80, "absoluteChange": 20, "percentChange": 25},
          "sameStoreSpend": {"current": 60, "reference": 50, "absoluteChange": 10, "percentChange": 20},
          "newStoreSpend": {"current": 40, "reference": 0, "absoluteChange": 40, "percentChange": 0},
          "lostStoreSpend": {"current": 0, "reference": 30, "absoluteChange": -30, "percentChange": -100}
        }
      ]
    }
  ]
}"#;

#[test]
fn json_source_loads_snapshot_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("db.json");
    fs::write(&path, DOCUMENT).expect("write fixture");

    let source = JsonSnapshotSource::new(&path);
    let snapshot = source.load_snapshot().expect("load snapshot");

    assert_eq!(snapshot.users.len(), 2);
    assert_eq!(snapshot.records_for(1).len(), 1);
    assert!(snapshot.records_for(2).is_empty());
    assert_eq!(source.describe(), path.display().to_string());
}

#[test]
fn dashboard_aggregates_loaded_document() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("db.json");
    fs::write(&path, DOCUMENT).expect("write fixture");

    let dashboard = Dashboard::load(&JsonSnapshotSource::new(&path));
    let total = dashboard.summary()[&MetricType::MySpend];
    assert_eq!(total.current, 100.0);
    assert_eq!(total.percent_change, 25.0);
    assert!(dashboard
        .grouped()
        .contains_key("USA - California - San Diego - Retail - Electronics"));
}

#[test]
fn missing_file_is_an_io_error_and_leaves_dashboard_empty() {
    let dir = tempdir().expect("tempdir");
    let source = JsonSnapshotSource::new(dir.path().join("absent.json"));

    assert!(matches!(source.load_snapshot(), Err(CoreError::Io(_))));
    let dashboard = Dashboard::load(&source);
    assert!(dashboard.users().is_empty());
    assert!(dashboard.grouped().is_empty());
}

#[test]
fn malformed_date_rejects_whole_document() {
    let broken = DOCUMENT.replace("2024-01-31", "Jan 31st");
    let err = parse_snapshot(&broken).expect_err("malformed date");
    assert!(matches!(err, CoreError::DataIntegrity(_)), "unexpected: {err}");
}

#[test]
fn inverted_record_window_is_rejected() {
    let inverted = DOCUMENT.replace("\"endDate\": \"2024-01-31\"", "\"endDate\": \"2023-12-31\"");
    let err = parse_snapshot(&inverted).expect_err("inverted window");
    let message = err.to_string();
    assert!(message.contains("user 1 item 0"), "unexpected: {message}");
}

#[test]
fn duplicate_user_ids_are_rejected() {
    let duplicated = DOCUMENT.replace("\"id\": 2", "\"id\": 1");
    let err = parse_snapshot(&duplicated).expect_err("duplicate id");
    assert!(err.to_string().contains("duplicate user id 1"));
}

#[test]
fn truncated_document_is_a_serialization_error() {
    let err = parse_snapshot(&DOCUMENT[..40]).expect_err("truncated");
    assert!(matches!(err, CoreError::Serde(_)));
}
