use super::*;

/// Every character advances `advance` px; `W` is twice as wide. Lines are `height` px tall.
struct MonoMetrics {
    advance: f64,
    height: f64,
    calls: usize,
}

impl MonoMetrics {
    fn new(advance: f64, height: f64) -> Self {
        Self {
            advance,
            height,
            calls: 0,
        }
    }
}

impl FontMetrics for MonoMetrics {
    fn measure(&mut self, text: &str, _font: &FontSpec) -> SlidecastResult<TextExtent> {
        self.calls += 1;
        let width = text
            .chars()
            .map(|c| if c == 'W' { 2.0 } else { 1.0 })
            .sum::<f64>()
            * self.advance;
        Ok(TextExtent {
            width,
            height: self.height,
        })
    }
}

fn boxed(x0: f64, y0: f64, x1: f64, y1: f64, spacing: f64) -> LayoutBox {
    LayoutBox::new(Rect::new(x0, y0, x1, y1), FontSpec::sized(10.0), spacing)
}

#[test]
fn empty_text_yields_no_lines_and_no_overflow() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    let out = TextLayoutEngine::new(&mut m)
        .layout("", &boxed(0.0, 0.0, 100.0, 100.0, 0.25))
        .unwrap();
    assert!(out.lines.is_empty());
    assert!(!out.overflowed());
}

#[test]
fn wraps_at_character_granularity() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    // Width 35 fits three 10px characters (30 < 35) but not four.
    let out = TextLayoutEngine::new(&mut m)
        .layout("今天天气很好啊", &boxed(5.0, 7.0, 40.0, 1000.0, 0.0))
        .unwrap();
    let texts: Vec<&str> = out.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["今天天", "气很好", "啊"]);
    assert_eq!(out.lines[0].origin, Point::new(5.0, 7.0));
    assert_eq!(out.lines[1].origin, Point::new(5.0, 17.0));
    assert!(!out.overflowed());
}

#[test]
fn width_must_be_strictly_less_than_box_width() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    // Exactly 30px wide box: three characters measure 30, which is not < 30.
    let out = TextLayoutEngine::new(&mut m)
        .layout("abcdef", &boxed(0.0, 0.0, 30.0, 1000.0, 0.0))
        .unwrap();
    assert!(out.lines.iter().all(|l| l.text.chars().count() == 2));
}

#[test]
fn line_spacing_advances_cursor_by_fraction_of_height() {
    let mut m = MonoMetrics::new(10.0, 20.0);
    let out = TextLayoutEngine::new(&mut m)
        .layout("abcd", &boxed(0.0, 0.0, 25.0, 1000.0, 0.5))
        .unwrap();
    let ys: Vec<f64> = out.lines.iter().map(|l| l.origin.y).collect();
    assert_eq!(ys, vec![0.0, 30.0]);
}

#[test]
fn over_wide_character_still_advances_one_per_line() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    let out = TextLayoutEngine::new(&mut m)
        .layout("WWW", &boxed(0.0, 0.0, 5.0, 1000.0, 0.0))
        .unwrap();
    assert_eq!(out.lines.len(), 3);
    assert!(out.lines.iter().all(|l| l.text == "W"));
}

#[test]
fn overflow_truncates_and_counts_dropped_characters() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    // Two lines of height 10 fit into 25px (0..10, 10..20); the third would end at 30.
    let out = TextLayoutEngine::new(&mut m)
        .layout("一二三四五六七八", &boxed(0.0, 0.0, 25.0, 25.0, 0.0))
        .unwrap();
    assert_eq!(out.joined_text(), "一二三四");
    assert_eq!(out.dropped_chars, 4);
    assert!(out.overflowed());
}

#[test]
fn box_too_short_for_any_line_drops_everything() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    let out = TextLayoutEngine::new(&mut m)
        .layout("abc", &boxed(0.0, 0.0, 100.0, 5.0, 0.0))
        .unwrap();
    assert!(out.lines.is_empty());
    assert_eq!(out.dropped_chars, 3);
}

#[test]
fn paragraphs_start_on_new_lines_and_share_the_cursor() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    let out = TextLayoutEngine::new(&mut m)
        .layout_paragraphs(&["ab", "cdefg", "h"], &boxed(0.0, 0.0, 35.0, 1000.0, 0.0))
        .unwrap();
    let texts: Vec<&str> = out.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["ab", "cde", "fg", "h"]);
    assert_eq!(out.lines[3].origin.y, 30.0);
}

#[test]
fn overflow_in_early_paragraph_drops_later_paragraphs() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    let out = TextLayoutEngine::new(&mut m)
        .layout_paragraphs(&["abcd", "ef"], &boxed(0.0, 0.0, 25.0, 10.0, 0.0))
        .unwrap();
    assert_eq!(out.joined_text(), "ab");
    assert_eq!(out.dropped_chars, 4);
}

#[test]
fn rejects_negative_line_spacing() {
    let mut m = MonoMetrics::new(10.0, 10.0);
    assert!(
        TextLayoutEngine::new(&mut m)
            .layout("x", &boxed(0.0, 0.0, 10.0, 10.0, -1.0))
            .is_err()
    );
}

#[test]
fn layout_is_deterministic() {
    let text = "重复两次得到完全一样的结果";
    let bx = boxed(3.0, 4.0, 50.0, 60.0, 0.25);
    let mut m = MonoMetrics::new(9.0, 11.0);
    let a = TextLayoutEngine::new(&mut m).layout(text, &bx).unwrap();
    let b = TextLayoutEngine::new(&mut m).layout(text, &bx).unwrap();
    assert_eq!(a, b);
    assert!(m.calls > 0);
}
