use super::*;
use serde_json::json;

#[test]
fn defaults_are_valid() {
    let cfg = BuildConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas.width, 1280);
    assert_eq!(cfg.canvas.height, 720);
    assert_eq!(cfg.fps, Fps { num: 50, den: 1 });
    assert_eq!(cfg.silence().unwrap(), Duration::from_secs(1));
    assert_eq!(cfg.encode.threads, 4);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg: BuildConfig = serde_json::from_value(json!({
        "silence_secs": 0.5,
        "theme": { "background": "#000", "body_size": 30.0 }
    }))
    .unwrap();
    assert_eq!(cfg.silence().unwrap(), Duration::from_millis(500));
    assert_eq!(cfg.theme.background, Rgba8::BLACK);
    assert_eq!(cfg.theme.body_size, 30.0);
    assert_eq!(cfg.theme.caption_size, 28.0);
    assert_eq!(cfg.canvas, Canvas::default());
}

#[test]
fn rejects_negative_silence() {
    let cfg = BuildConfig {
        silence_secs: -1.0,
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_odd_canvas() {
    let cfg = BuildConfig {
        canvas: Canvas {
            width: 641,
            height: 360,
        },
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_bad_theme_values() {
    let mut cfg = BuildConfig::default();
    cfg.theme.body_size = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = BuildConfig::default();
    cfg.theme.margin_x_frac = 1.5;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "fps": { "num": 25, "den": 1 } }"#).unwrap();
    let cfg = BuildConfig::from_path(&path).unwrap();
    assert_eq!(cfg.fps.num, 25);

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        BuildConfig::from_path(&path),
        Err(SlidecastError::Serde(_))
    ));
}
