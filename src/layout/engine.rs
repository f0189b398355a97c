use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::layout::metrics::{FontMetrics, FontSpec, TextExtent};

/// Target rectangle plus the font and spacing used to fill it.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBox {
    /// Bounding rectangle `(x0, y0, x1, y1)` in canvas pixels.
    pub rect: Rect,
    /// Font used for every line in the box.
    pub font: FontSpec,
    /// Extra gap after each line as a fraction of that line's height.
    pub line_spacing: f64,
}

impl LayoutBox {
    /// Create a box from its corner coordinates.
    pub fn new(rect: Rect, font: FontSpec, line_spacing: f64) -> Self {
        Self {
            rect,
            font,
            line_spacing,
        }
    }
}

/// One committed line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutLine {
    /// Text drawn on this line.
    pub text: String,
    /// Top-left position of the line on the canvas.
    pub origin: Point,
    /// Measured size of `text`.
    pub extent: TextExtent,
}

/// Result of laying text out into a [`LayoutBox`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    /// Lines in drawing order.
    pub lines: Vec<LaidOutLine>,
    /// Characters that did not fit and were dropped.
    pub dropped_chars: usize,
}

impl TextLayout {
    /// `true` when some text was dropped because the box ran out of vertical space.
    pub fn overflowed(&self) -> bool {
        self.dropped_chars > 0
    }

    /// Concatenation of every emitted line.
    pub fn joined_text(&self) -> String {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }
}

/// Greedy, character-granularity line breaker.
///
/// The engine performs no shaping of its own; all measurements come from the borrowed
/// [`FontMetrics`] provider.
pub struct TextLayoutEngine<'m, M: FontMetrics + ?Sized> {
    metrics: &'m mut M,
}

impl<'m, M: FontMetrics + ?Sized> TextLayoutEngine<'m, M> {
    /// Wrap a metrics provider.
    pub fn new(metrics: &'m mut M) -> Self {
        Self { metrics }
    }

    /// Lay out a single paragraph of text.
    pub fn layout(&mut self, text: &str, bx: &LayoutBox) -> SlidecastResult<TextLayout> {
        self.layout_paragraphs(&[text], bx)
    }

    /// Lay out several paragraphs into one box, each starting on a fresh line.
    ///
    /// Paragraphs share the vertical cursor. Once a line no longer fits, it and everything after
    /// it (including later paragraphs) is dropped.
    pub fn layout_paragraphs<S: AsRef<str>>(
        &mut self,
        paragraphs: &[S],
        bx: &LayoutBox,
    ) -> SlidecastResult<TextLayout> {
        if !bx.line_spacing.is_finite() || bx.line_spacing < 0.0 {
            return Err(SlidecastError::validation(
                "line_spacing must be finite and >= 0",
            ));
        }

        let mut out = TextLayout::default();
        let mut y = bx.rect.y0;
        for (i, para) in paragraphs.iter().enumerate() {
            let para = para.as_ref();
            let stopped_at = self.layout_one(para, bx, &mut y, &mut out.lines)?;
            if let Some(byte_off) = stopped_at {
                let rest: usize = paragraphs[i + 1..]
                    .iter()
                    .map(|p| p.as_ref().chars().count())
                    .sum();
                out.dropped_chars = para[byte_off..].chars().count() + rest;
                tracing::warn!(
                    dropped = out.dropped_chars,
                    "text box overflows, dropping {} characters",
                    out.dropped_chars
                );
                break;
            }
        }
        Ok(out)
    }

    /// Returns the byte offset where layout stopped on overflow.
    fn layout_one(
        &mut self,
        text: &str,
        bx: &LayoutBox,
        y: &mut f64,
        lines: &mut Vec<LaidOutLine>,
    ) -> SlidecastResult<Option<usize>> {
        let max_width = bx.rect.width();
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let n_chars = offsets.len() - 1;

        let mut idx = 0usize;
        while idx < n_chars {
            // Always take at least one character so an over-wide glyph cannot stall the loop.
            let mut count = 1usize;
            while idx + count < n_chars {
                let candidate = &text[offsets[idx]..offsets[idx + count + 1]];
                let extent = self.metrics.measure(candidate, &bx.font)?;
                if extent.width < max_width {
                    count += 1;
                } else {
                    break;
                }
            }

            let line = &text[offsets[idx]..offsets[idx + count]];
            let extent = self.metrics.measure(line, &bx.font)?;
            if *y + extent.height > bx.rect.y1 {
                return Ok(Some(offsets[idx]));
            }

            lines.push(LaidOutLine {
                text: line.to_owned(),
                origin: Point::new(bx.rect.x0, *y),
                extent,
            });
            *y += extent.height * (1.0 + bx.line_spacing);
            idx += count;
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
