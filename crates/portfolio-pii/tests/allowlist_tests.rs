//! Integration tests for allowlist persistence.

use chrono::{TimeZone, Utc};
use portfolio_pii::allowlist::{AllowlistDocument, DOCUMENT_VERSION};
use portfolio_pii::{AllowlistEntry, AllowlistStore, PiiCategory, PiiScanner};
use tempfile::TempDir;

#[tokio::test]
async fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("allowlist.json");

    let mut scanner = PiiScanner::new();
    scanner.set_allowlist_path(&path);
    scanner.add_to_allowlist("Public@Company.com", Some(PiiCategory::Email), Some("inbox"));
    scanner.add_to_allowlist("555-000-1111", None, None);
    scanner.save_allowlist(None).await.unwrap();

    let mut restored = PiiScanner::new();
    restored.set_allowlist_path(&path);
    assert!(restored.load_allowlist(None).await.unwrap());
    assert_eq!(restored.get_allowlist(), scanner.get_allowlist());
    assert_eq!(restored.get_allowlist_entries(), scanner.get_allowlist_entries());
    assert!(restored.scan("mail public@company.com").items.is_empty());
}

#[tokio::test]
async fn load_missing_file_returns_false() {
    let dir = TempDir::new().unwrap();
    let mut scanner = PiiScanner::new();
    scanner.add_to_allowlist("kept", None, None);

    let loaded = scanner
        .load_allowlist(Some(dir.path().join("absent.json").as_path()))
        .await
        .unwrap();
    assert!(!loaded);
    assert!(scanner.is_allowlisted("kept"));
}

#[tokio::test]
async fn malformed_document_leaves_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");

    let mut scanner = PiiScanner::new();
    scanner.add_to_allowlist("kept", None, None);

    for body in [
        "{not json",
        r#"{"entries": []}"#,
        r#"{"version": "1.0", "entries": "nope"}"#,
        r#"{"version": "1.0", "entries": [{"value": "x", "type": "passport"}]}"#,
    ] {
        std::fs::write(&path, body).unwrap();
        let err = scanner.load_allowlist(Some(path.as_path())).await.unwrap_err();
        assert!(err.is_format(), "{body}: {err}");
        assert_eq!(scanner.get_allowlist(), vec!["kept".to_string()]);
    }
}

#[tokio::test]
async fn missing_path_is_config_error() {
    let mut scanner = PiiScanner::new();
    assert!(scanner.get_allowlist_path().is_none());
    assert!(scanner.save_allowlist(None).await.unwrap_err().is_config());
    assert!(scanner.load_allowlist(None).await.unwrap_err().is_config());
}

#[tokio::test]
async fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("allow.json");

    let mut store = AllowlistStore::new();
    store.add("a@b.com", None, None);
    store.save(Some(path.as_path())).await.unwrap();
    assert!(path.exists());
    assert!(store.path().is_none());
}

#[tokio::test]
async fn load_replaces_existing_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("allow.json");
    std::fs::write(
        &path,
        r#"{"version": "1.0", "entries": [{"value": "NEW", "addedAt": 1700000000000}]}"#,
    )
    .unwrap();

    let mut store = AllowlistStore::with_path(&path);
    store.add("old", None, None);
    assert!(store.load(None).await.unwrap());
    assert_eq!(store.values(), vec!["new".to_string()]);
    assert_eq!(
        store.entry("new").unwrap().added_at,
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    );
}

#[tokio::test]
async fn saved_document_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("allow.json");

    let mut store = AllowlistStore::with_path(&path);
    store.set_entries([
        AllowlistEntry::new("b@x.com").with_category(PiiCategory::Email),
        AllowlistEntry::new("a").with_reason("test fixture"),
    ]);
    store.save(None).await.unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["version"], DOCUMENT_VERSION);
    assert!(json["lastModified"].is_string());

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["value"], "a");
    assert_eq!(entries[0]["reason"], "test fixture");
    assert!(entries[0].get("type").is_none());
    assert_eq!(entries[1]["value"], "b@x.com");
    assert_eq!(entries[1]["type"], "email");
}

#[test]
fn blocking_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("allow.json");

    let mut store = AllowlistStore::with_path(&path);
    store.add("555-123-4567", Some(PiiCategory::Phone), None);
    store.save_blocking(None).unwrap();

    let mut restored = AllowlistStore::with_path(&path);
    assert!(restored.load_blocking(None).unwrap());
    assert_eq!(restored.entries(), store.entries());
}

#[test]
fn document_parse_accepts_numeric_version() {
    let doc = AllowlistDocument::parse(r#"{"version": 1.0, "entries": []}"#).unwrap();
    assert_eq!(doc.version, "1.0");
}
