use crate::assets::decode::{PreparedImage, load_image};
use crate::config::SlideTheme;
use crate::content::ContentItem;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::SlidecastResult;
use crate::layout::engine::{LayoutBox, TextLayout, TextLayoutEngine};
use crate::layout::metrics::FontSpec;
use crate::slides::canvas::SlideCanvas;
use crate::slides::font::SlideFont;
use crate::slides::geometry::{CoverGeometry, ItemGeometry};
use crate::slides::slide::Slide;

/// `【01/05】title` caption used by item slides and the table of contents.
pub fn caption_text(index: usize, total: usize, title: &str) -> String {
    format!("【{:02}/{:02}】{title}", index + 1, total)
}

/// Draws cover, item and ending slides with one font and theme.
pub struct SlideRenderer<'a, F: SlideFont + ?Sized> {
    font: &'a mut F,
    theme: &'a SlideTheme,
    canvas: Canvas,
}

impl<'a, F: SlideFont + ?Sized> SlideRenderer<'a, F> {
    /// Create a renderer for slides of size `canvas`.
    pub fn new(font: &'a mut F, theme: &'a SlideTheme, canvas: Canvas) -> Self {
        Self {
            font,
            theme,
            canvas,
        }
    }

    /// Title and date on the left third, a divider, and the table of contents on the right.
    ///
    /// Entries that do not fit the contents box are dropped with a warning.
    pub fn render_cover(&mut self, items: &[ContentItem], date: &str) -> SlidecastResult<Slide> {
        let theme = self.theme;
        let geo = CoverGeometry::new(self.canvas, theme);
        let mut canvas = SlideCanvas::new(self.canvas, theme.background)?;

        let title_font = FontSpec::sized(theme.cover_title_size);
        let title = self.font.measure(&theme.show_title, &title_font)?;
        let title_origin = Point::new(
            (geo.title_panel.width() - title.width) / 2.0,
            (self.canvas.h() - title.height) / 2.0 + theme.cover_title_y_offset,
        );
        self.font.paint_line(
            &mut canvas,
            &theme.show_title,
            title_origin,
            &title_font,
            theme.text_color,
        )?;

        let date_font = FontSpec::sized(theme.cover_date_size);
        let date_ext = self.font.measure(date, &date_font)?;
        let date_origin = Point::new(
            (geo.title_panel.width() - date_ext.width) / 2.0,
            (self.canvas.h() - date_ext.height) / 2.0 + title.height + theme.cover_date_y_offset,
        );
        self.font
            .paint_line(&mut canvas, date, date_origin, &date_font, theme.text_color)?;

        canvas.fill_rect(geo.divider, theme.divider_color);

        let total = items.len();
        let entries: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| caption_text(i, total, item.title()))
            .collect();
        let toc = LayoutBox::new(
            geo.toc,
            FontSpec::sized(theme.toc_size),
            theme.line_spacing,
        );
        let laid = self.draw_text_box(&mut canvas, &entries, &toc)?;
        if laid.overflowed() {
            tracing::warn!(
                entries = total,
                shown = laid.lines.len(),
                "table of contents truncated"
            );
        }

        Ok(canvas.finish())
    }

    /// Caption, summary body, optional image and source citation for item `index` of `total`.
    ///
    /// An image that is missing, undecodable or degenerate is skipped with a warning and the
    /// body falls back to the full width.
    pub fn render_item(
        &mut self,
        item: &ContentItem,
        index: usize,
        total: usize,
    ) -> SlidecastResult<Slide> {
        let theme = self.theme;
        let geo = ItemGeometry::new(self.canvas, theme);
        let image = item
            .image_path()
            .and_then(|path| match prepare_image(&geo, path) {
                Ok(placed) => placed,
                Err(e) => {
                    tracing::warn!(
                        title = item.title(),
                        path = %path.display(),
                        error = %e,
                        "image unusable, rendering text-only slide"
                    );
                    None
                }
            });

        let mut canvas = SlideCanvas::new(self.canvas, theme.background)?;

        let caption = LayoutBox::new(
            geo.caption,
            FontSpec::sized(theme.caption_size),
            theme.line_spacing,
        );
        self.draw_text_box(
            &mut canvas,
            &[caption_text(index, total, item.title())],
            &caption,
        )?;

        let body_rect = if image.is_some() {
            geo.body_half
        } else {
            geo.body_full
        };
        let body = LayoutBox::new(
            body_rect,
            FontSpec::sized(theme.body_size),
            theme.body_line_spacing,
        );
        self.draw_text_box(&mut canvas, &[item.brief_summary()], &body)?;

        if let Some((prepared, rect)) = &image {
            canvas.draw_image(prepared, rect.origin())?;
        }

        let source = LayoutBox::new(
            geo.source,
            FontSpec::sized(theme.source_size),
            theme.line_spacing,
        );
        let citation = format!(
            "{}{} {}",
            theme.source_label,
            item.source_name(),
            item.url()
        );
        self.draw_text_box(&mut canvas, &[citation], &source)?;

        Ok(canvas.finish())
    }

    /// The closing slide reuses the cover template.
    pub fn render_ending(&mut self, items: &[ContentItem], date: &str) -> SlidecastResult<Slide> {
        self.render_cover(items, date)
    }

    fn draw_text_box<S: AsRef<str>>(
        &mut self,
        canvas: &mut SlideCanvas,
        paragraphs: &[S],
        bx: &LayoutBox,
    ) -> SlidecastResult<TextLayout> {
        let laid = TextLayoutEngine::new(&mut *self.font).layout_paragraphs(paragraphs, bx)?;
        for line in &laid.lines {
            self.font.paint_line(
                canvas,
                &line.text,
                line.origin,
                &bx.font,
                self.theme.text_color,
            )?;
        }
        Ok(laid)
    }
}

fn prepare_image(
    geo: &ItemGeometry,
    path: &std::path::Path,
) -> SlidecastResult<Option<(PreparedImage, Rect)>> {
    let source = load_image(path)?;
    let Some(rect) = geo.fit_image(source.aspect_ratio()) else {
        tracing::warn!(path = %path.display(), "image too small to place, skipping");
        return Ok(None);
    };
    let prepared = source.resize_premul(rect.width() as u32, rect.height() as u32)?;
    Ok(Some((prepared, rect)))
}

#[cfg(test)]
#[path = "../../tests/unit/slides/renderer.rs"]
mod tests;
