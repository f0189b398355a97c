use super::*;

fn checker(canvas: Canvas) -> Slide {
    let mut rgba8_premul = Vec::with_capacity(canvas.rgba_len());
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            rgba8_premul.extend_from_slice(&[v, 0, 255 - v, 255]);
        }
    }
    Slide {
        width: canvas.width,
        height: canvas.height,
        rgba8_premul,
    }
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(slide_file_name(0), "slide_000.png");
    assert_eq!(slide_file_name(7), "slide_007.png");
    assert_eq!(slide_file_name(123), "slide_123.png");
    assert!(slide_file_name(9) < slide_file_name(10));
}

#[test]
fn opaque_slide_survives_png() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = Canvas {
        width: 6,
        height: 4,
    };
    let slide = checker(canvas);
    let path = dir.path().join(slide_file_name(0));
    slide.save_png(&path).unwrap();

    let back = Slide::load_png(&path, canvas).unwrap();
    assert_eq!(back, slide);
}

#[test]
fn load_rejects_size_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("s.png");
    checker(Canvas {
        width: 6,
        height: 4,
    })
    .save_png(&path)
    .unwrap();

    let err = Slide::load_png(
        &path,
        Canvas {
            width: 8,
            height: 4,
        },
    )
    .unwrap_err();
    assert!(matches!(err, SlidecastError::Validation(_)));
}

#[test]
fn load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Slide::load_png(&dir.path().join("nope.png"), Canvas::default()).is_err());
}
