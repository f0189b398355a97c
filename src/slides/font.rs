use std::borrow::Cow;

use crate::assets::font::FontResource;
use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::layout::metrics::{FontMetrics, FontSpec, TextExtent};
use crate::slides::canvas::{SlideCanvas, affine_to_cpu};

/// A font that measures text for layout and paints the resulting lines.
///
/// Measuring and painting go through the same face so wrapped lines never exceed the box they
/// were fitted into.
pub trait SlideFont: FontMetrics {
    /// Paint `text` on one line with its top-left corner at `origin`.
    fn paint_line(
        &mut self,
        canvas: &mut SlideCanvas,
        text: &str,
        origin: Point,
        font: &FontSpec,
        color: Rgba8,
    ) -> SlidecastResult<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrush {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<Rgba8> for TextBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Real font face shaped with Parley and drawn as `vello_cpu` glyph runs.
pub struct ParleyFont {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
}

impl ParleyFont {
    /// Register the font bytes and remember the first family they contain.
    pub fn new(resource: &FontResource) -> SlidecastResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(resource.bytes().to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            SlidecastError::font(format!(
                "no font families found in '{}'",
                resource.path().display()
            ))
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SlidecastError::font("registered font family has no name"))?
            .to_string();

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(resource.bytes().to_vec()),
            0,
        );
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font_data,
        })
    }

    /// Family name the face registered under.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    fn shape(
        &mut self,
        text: &str,
        font: &FontSpec,
        brush: TextBrush,
    ) -> SlidecastResult<parley::Layout<TextBrush>> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(SlidecastError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        let family = font
            .family
            .clone()
            .unwrap_or_else(|| self.family_name.clone());

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl FontMetrics for ParleyFont {
    fn measure(&mut self, text: &str, font: &FontSpec) -> SlidecastResult<TextExtent> {
        let layout = self.shape(text, font, TextBrush::default())?;
        Ok(TextExtent {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
        })
    }
}

impl SlideFont for ParleyFont {
    fn paint_line(
        &mut self,
        canvas: &mut SlideCanvas,
        text: &str,
        origin: Point,
        font: &FontSpec,
        color: Rgba8,
    ) -> SlidecastResult<()> {
        let layout = self.shape(text, font, color.into())?;
        let ctx = canvas.ctx_mut();
        ctx.set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

/// Deterministic stand-in face that draws every visible character as a solid block.
///
/// ASCII characters advance half an em, everything else a full em, and every line is
/// `line_height` ems tall. Useful for previews and for rendering without a font file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockFace {
    /// Line height in ems.
    pub line_height: f64,
}

impl Default for BlockFace {
    fn default() -> Self {
        Self { line_height: 1.25 }
    }
}

impl BlockFace {
    fn advance(c: char, size: f64) -> f64 {
        if c.is_ascii() { size * 0.5 } else { size }
    }

    fn size(font: &FontSpec) -> SlidecastResult<f64> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(SlidecastError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        Ok(f64::from(font.size_px))
    }
}

impl FontMetrics for BlockFace {
    fn measure(&mut self, text: &str, font: &FontSpec) -> SlidecastResult<TextExtent> {
        let size = Self::size(font)?;
        Ok(TextExtent {
            width: text.chars().map(|c| Self::advance(c, size)).sum(),
            height: size * self.line_height,
        })
    }
}

impl SlideFont for BlockFace {
    fn paint_line(
        &mut self,
        canvas: &mut SlideCanvas,
        text: &str,
        origin: Point,
        font: &FontSpec,
        color: Rgba8,
    ) -> SlidecastResult<()> {
        let size = Self::size(font)?;
        let top = origin.y + size * (self.line_height - 1.0) / 2.0;
        let mut x = origin.x;
        for c in text.chars() {
            let adv = Self::advance(c, size);
            if !c.is_whitespace() {
                let inset = adv * 0.1;
                canvas.fill_rect(
                    Rect::new(x + inset, top + inset, x + adv - inset, top + size - inset),
                    color,
                );
            }
            x += adv;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/font.rs"]
mod tests;
