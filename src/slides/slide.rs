use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

/// A fully rendered slide in premultiplied RGBA8.
///
/// A slide carries no ordinal of its own; the cover and ending render identically. Its position
/// is [`TimedSegment::ordinal`](crate::timeline::TimedSegment::ordinal), which also names the
/// file it is stored in (see [`slide_file_name`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub rgba8_premul: Vec<u8>,
}

/// File name of the slide at `ordinal` inside a build workspace (`slide_000.png`, ...).
pub fn slide_file_name(ordinal: usize) -> String {
    format!("slide_{ordinal:03}.png")
}

impl Slide {
    /// Canvas this slide was rendered for.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Write the slide as a straight-alpha PNG.
    pub fn save_png(&self, path: &Path) -> SlidecastResult<()> {
        let mut straight = self.rgba8_premul.clone();
        unpremultiply_rgba8_in_place(&mut straight);
        image::save_buffer_with_format(
            path,
            &straight,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            SlidecastError::encode(format!("write slide png '{}': {e}", path.display()))
        })
    }

    /// Read a slide PNG back, rejecting files whose size does not match `canvas`.
    pub fn load_png(path: &Path, canvas: Canvas) -> SlidecastResult<Self> {
        let img = image::open(path)
            .map_err(|e| {
                SlidecastError::encode(format!("read slide png '{}': {e}", path.display()))
            })?
            .to_rgba8();
        if img.dimensions() != (canvas.width, canvas.height) {
            return Err(SlidecastError::validation(format!(
                "slide '{}' is {}x{}, expected {}x{}",
                path.display(),
                img.width(),
                img.height(),
                canvas.width,
                canvas.height
            )));
        }
        let mut rgba8_premul = img.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            rgba8_premul,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slides/slide.rs"]
mod tests;
