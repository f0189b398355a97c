use serde_json::json;

use super::*;

fn sample() -> ContentItem {
    ContentItem::builder("标题")
        .body("正文")
        .source_name("新闻社")
        .url("https://example.com/a")
        .timestamps(1_700_000_000.5, 1_700_000_100.0)
        .comment_count(42)
        .build()
}

#[test]
fn enrichment_returns_new_values() {
    let base = sample();
    let summarized = base.with_summary("摘要");
    let voiced = summarized.with_audio_path("/tmp/000.mp3");

    assert_eq!(base.brief_summary(), "");
    assert!(base.audio_path().is_none());
    assert_eq!(summarized.brief_summary(), "摘要");
    assert!(summarized.audio_path().is_none());
    assert_eq!(voiced.audio_path(), Some(Path::new("/tmp/000.mp3")));
    assert_eq!(voiced.title(), base.title());
}

#[test]
fn missing_audio_is_a_fatal_audio_error() {
    let err = sample().require_audio_path().unwrap_err();
    assert!(matches!(err, SlidecastError::Audio(_)));
}

#[test]
fn optional_fields_default_when_absent_or_empty() {
    let item: ContentItem = serde_json::from_value(json!({
        "title": "t",
        "content": "c",
        "url": "u",
        "publish_timestamp": 1.0,
        "request_timestamp": 2.0,
        "image_path": "",
        "audio_path": "a.mp3"
    }))
    .unwrap();
    assert_eq!(item.source_name(), "");
    assert_eq!(item.brief_summary(), "");
    assert_eq!(item.comment_count(), 0);
    assert!(item.image_path().is_none());
    assert_eq!(item.audio_path(), Some(Path::new("a.mp3")));
}

#[test]
fn published_at_converts_epoch_seconds() {
    let at = sample().published_at().unwrap();
    assert_eq!(at.timestamp(), 1_700_000_000);
    assert_eq!(at.timestamp_subsec_millis(), 500);
}

#[test]
fn json_file_round_trip_preserves_cjk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("items.json");
    let items = vec![sample(), sample().with_summary("第二条")];
    write_items_json(&items, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("标题"));
    assert!(text.contains("\"brief_content\""));

    let back = read_items_json(&path).unwrap();
    assert_eq!(back, items);
}

#[test]
fn unparsable_items_file_is_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, "[{]").unwrap();
    assert!(matches!(
        read_items_json(&path),
        Err(SlidecastError::Serde(_))
    ));
}
