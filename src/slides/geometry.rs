use crate::config::SlideTheme;
use crate::foundation::core::{Canvas, Point, Rect};

/// Regions of the cover (and ending) slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverGeometry {
    /// Left panel holding the centered title and date.
    pub title_panel: Rect,
    /// Vertical divider bar between the panel and the table of contents.
    pub divider: Rect,
    /// Table-of-contents box.
    pub toc: Rect,
}

impl CoverGeometry {
    /// Derive cover regions for `canvas`.
    pub fn new(canvas: Canvas, theme: &SlideTheme) -> Self {
        let (w, h) = (canvas.w(), canvas.h());
        let (mx, my) = margins(canvas, theme);
        let split = w / 3.0;
        let half_bar = theme.cover_divider_width / 2.0;
        Self {
            title_panel: Rect::new(0.0, 0.0, split, h),
            divider: Rect::new(split - half_bar, my, split + half_bar, h - my),
            toc: Rect::new(
                split + theme.toc_x_offset,
                my + theme.toc_y_offset,
                w - mx,
                h - my,
            ),
        }
    }
}

/// Regions of an item slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemGeometry {
    /// Caption line(s) across the full width.
    pub caption: Rect,
    /// Body box when the slide has no image.
    pub body_full: Rect,
    /// Body box narrowed to the left half when an image is shown.
    pub body_half: Rect,
    /// Source citation box from below the body to the bottom margin.
    pub source: Rect,
    margin_x: f64,
    canvas_width: f64,
}

impl ItemGeometry {
    /// Derive item regions for `canvas`.
    pub fn new(canvas: Canvas, theme: &SlideTheme) -> Self {
        let (w, h) = (canvas.w(), canvas.h());
        let (mx, my) = margins(canvas, theme);
        let caption_bottom = my + h * theme.caption_height_frac;
        let body_top = caption_bottom + h * theme.caption_body_gap_frac;
        let body_bottom = body_top + h * theme.body_height_frac;
        let source_top = body_bottom + h * theme.body_source_gap_frac;
        Self {
            caption: Rect::new(mx, my, w - mx, caption_bottom),
            body_full: Rect::new(mx, body_top, w - mx, body_bottom),
            body_half: Rect::new(mx, body_top, w / 2.0 - mx, body_bottom),
            source: Rect::new(mx, source_top, w - mx, h - my),
            margin_x: mx,
            canvas_width: w,
        }
    }

    /// Placement of an image with aspect ratio `ratio` (width / height) in the right half.
    ///
    /// The image is as wide as the right half allows (minus margins) but never taller than the
    /// body box; both sides are floored to whole pixels and the result is centered on
    /// `(3W/4, body center)`. Returns `None` if the image would collapse to zero pixels.
    pub fn fit_image(&self, ratio: f64) -> Option<Rect> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return None;
        }
        let max_width = self.canvas_width / 2.0 - self.margin_x * 2.0;
        if max_width <= 0.0 {
            return None;
        }
        let height = (max_width / ratio).min(self.body_full.height()).floor();
        let width = (ratio * height).floor();
        if width < 1.0 || height < 1.0 {
            return None;
        }
        let center = Point::new(self.canvas_width * 3.0 / 4.0, self.body_full.center().y);
        let x0 = (center.x - width / 2.0).floor();
        let y0 = (center.y - height / 2.0).floor();
        Some(Rect::new(x0, y0, x0 + width, y0 + height))
    }
}

fn margins(canvas: Canvas, theme: &SlideTheme) -> (f64, f64) {
    (
        canvas.w() * theme.margin_x_frac,
        canvas.h() * theme.margin_y_frac,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/slides/geometry.rs"]
mod tests;
