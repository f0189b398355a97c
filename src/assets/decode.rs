use std::path::Path;

use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decoded straight-alpha RGBA8 image, ready to be scaled onto a slide.
#[derive(Clone, Debug)]
pub struct SourceImage {
    rgba: image::RgbaImage,
}

/// Scaled image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

/// Decode encoded image bytes (any format the `image` crate recognizes).
pub fn decode_image(bytes: &[u8]) -> SlidecastResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SlidecastError::image(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(SlidecastError::image("image has zero width or height"));
    }
    Ok(SourceImage { rgba })
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> SlidecastResult<SourceImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        SlidecastError::image(format!("failed to read image '{}': {e}", path.display()))
    })?;
    decode_image(&bytes).map_err(|e| match e {
        SlidecastError::Image(msg) => SlidecastError::image(format!("{}: {msg}", path.display())),
        other => other,
    })
}

impl SourceImage {
    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.rgba.dimensions()
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        let (w, h) = self.dimensions();
        f64::from(w) / f64::from(h)
    }

    /// Resample to `width`×`height` and premultiply.
    pub fn resize_premul(&self, width: u32, height: u32) -> SlidecastResult<PreparedImage> {
        if width == 0 || height == 0 {
            return Err(SlidecastError::image(format!(
                "cannot scale image to {width}x{height}"
            )));
        }
        let scaled = if self.rgba.dimensions() == (width, height) {
            self.rgba.clone()
        } else {
            image::imageops::resize(
                &self.rgba,
                width,
                height,
                image::imageops::FilterType::Triangle,
            )
        };
        let mut rgba8_premul = scaled.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Ok(PreparedImage {
            width,
            height,
            rgba8_premul,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
