use crate::foundation::error::SlidecastResult;

/// Font descriptor attached to a [`LayoutBox`](crate::layout::engine::LayoutBox).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    /// Font size in pixels.
    pub size_px: f32,
    /// Optional family name. `None` selects the provider's default family.
    #[serde(default)]
    pub family: Option<String>,
}

impl FontSpec {
    /// Font spec for the provider's default family.
    pub fn sized(size_px: f32) -> Self {
        Self {
            size_px,
            family: None,
        }
    }
}

/// Measured ink box of a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Horizontal advance in pixels.
    pub width: f64,
    /// Line height in pixels.
    pub height: f64,
}

/// Provider of width/height measurements for arbitrary substrings.
///
/// Implementations must be deterministic: the same text and font always measure the same.
pub trait FontMetrics {
    /// Measure `text` set in `font` on a single unbroken line.
    fn measure(&mut self, text: &str, font: &FontSpec) -> SlidecastResult<TextExtent>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &mut M {
    fn measure(&mut self, text: &str, font: &FontSpec) -> SlidecastResult<TextExtent> {
        (**self).measure(text, font)
    }
}
