use std::path::PathBuf;
use subtrack_core::{load_feed, load_feed_or_empty, DecodeCategory, FeedError, Subscriber};

fn write_feed(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_feed_decodes_a_subscriber_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_feed(
        &dir,
        "mock.json",
        r#"[
            {"id": "1", "name": "Alice", "gender": "F"},
            {"id": "2", "name": "Bob", "gender": "M"}
        ]"#,
    );

    let subscribers = load_feed(&path).unwrap();
    assert_eq!(
        subscribers,
        vec![
            Subscriber::new("1", "Alice", "F"),
            Subscriber::new("2", "Bob", "M"),
        ]
    );
}

#[test]
fn load_feed_reports_missing_file_as_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-feed.json");

    let err = load_feed(&path).unwrap_err();
    assert!(matches!(err, FeedError::Unreadable { .. }));
}

#[test]
fn load_feed_categorizes_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_feed(&dir, "broken.json", "not json at all {{{");

    let err = load_feed(&path).unwrap_err();
    match err {
        FeedError::Decode { category, .. } => assert_eq!(category, DecodeCategory::Syntax),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_feed_categorizes_shape_mismatches() {
    let dir = tempfile::tempdir().unwrap();
    // Well-formed JSON, but `id` has the wrong type and `gender` is missing.
    let path = write_feed(&dir, "shape.json", r#"[{"id": 1, "name": "Alice"}]"#);

    let err = load_feed(&path).unwrap_err();
    match err {
        FeedError::Decode { category, .. } => assert_eq!(category, DecodeCategory::Shape),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_feed_categorizes_truncated_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_feed(&dir, "cut.json", r#"[{"id": "1", "name": "Ali"#);

    let err = load_feed(&path).unwrap_err();
    match err {
        FeedError::Decode { category, .. } => assert_eq!(category, DecodeCategory::Truncated),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lenient_load_returns_empty_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(load_feed_or_empty(&path).is_empty());
}

#[test]
fn lenient_load_returns_empty_on_malformed_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_feed(&dir, "garbage.json", "]{[");

    assert!(load_feed_or_empty(&path).is_empty());
}

#[test]
fn lenient_load_skips_records_with_invalid_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_feed(
        &dir,
        "partial.json",
        r#"[
            {"id": "1", "name": "Alice", "gender": "F"},
            {"id": "", "name": "NoId", "gender": "M"},
            {"id": "2", "name": "Bob", "gender": "M"}
        ]"#,
    );

    let subscribers = load_feed_or_empty(&path);
    assert_eq!(
        subscribers,
        vec![
            Subscriber::new("1", "Alice", "F"),
            Subscriber::new("2", "Bob", "M"),
        ]
    );
}
