use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn item_regions_follow_default_theme() {
    let g = ItemGeometry::new(Canvas::default(), &SlideTheme::default());
    assert!(approx(g.caption.x0, 76.8));
    assert!(approx(g.caption.y0, 57.6));
    assert!(approx(g.caption.x1, 1280.0 - 76.8));
    assert!(approx(g.caption.y1, 57.6 + 50.4));

    assert!(approx(g.body_full.y0, 57.6 + 50.4 + 21.6));
    assert!(approx(g.body_full.height(), 720.0 * 0.66));
    assert!(approx(g.body_half.x1, 640.0 - 76.8));
    assert_eq!(g.body_half.y0, g.body_full.y0);
    assert_eq!(g.body_half.y1, g.body_full.y1);

    assert!(approx(g.source.y0, g.body_full.y1 + 21.6));
    assert!(approx(g.source.y1, 720.0 - 57.6));
}

#[test]
fn wide_image_is_width_bound() {
    let g = ItemGeometry::new(Canvas::default(), &SlideTheme::default());
    // max width 640 - 153.6 = 486.4, 2:1 gives height 243.2 -> 243, width 486.
    let r = g.fit_image(2.0).unwrap();
    assert_eq!(r.width(), 486.0);
    assert_eq!(r.height(), 243.0);
    assert!((r.center().x - 960.0).abs() <= 1.0);
    assert!((r.center().y - g.body_full.center().y).abs() <= 1.0);
    assert!(r.x0 >= 640.0);
}

#[test]
fn tall_image_is_body_height_bound() {
    let g = ItemGeometry::new(Canvas::default(), &SlideTheme::default());
    let r = g.fit_image(0.5).unwrap();
    assert_eq!(r.height(), (720.0f64 * 0.66).floor());
    assert_eq!(r.width(), (0.5 * r.height()).floor());
    assert_eq!(r.x0, r.x0.floor());
    assert_eq!(r.y0, r.y0.floor());
}

#[test]
fn degenerate_ratios_have_no_placement() {
    let g = ItemGeometry::new(Canvas::default(), &SlideTheme::default());
    assert!(g.fit_image(0.0).is_none());
    assert!(g.fit_image(f64::NAN).is_none());
    assert!(g.fit_image(1e9).is_none());
}

#[test]
fn cover_splits_at_one_third() {
    let g = CoverGeometry::new(Canvas::default(), &SlideTheme::default());
    let third = 1280.0 / 3.0;
    assert!(approx(g.title_panel.x1, third));
    assert!(approx(g.divider.center().x, third));
    assert!(approx(g.divider.width(), 5.0));
    assert!(approx(g.divider.y0, 57.6));
    assert!(approx(g.toc.x0, third + 30.0));
    assert!(approx(g.toc.y0, 57.6 + 10.0));
    assert!(approx(g.toc.x1, 1280.0 - 76.8));
}
