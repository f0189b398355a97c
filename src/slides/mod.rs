//! Slide rasterization.
//!
//! Slides are drawn with `vello_cpu` onto an opaque background and handed around as
//! premultiplied RGBA8 buffers. Text goes through the greedy
//! [`TextLayoutEngine`](crate::layout::engine::TextLayoutEngine) and is painted by a
//! [`SlideFont`](font::SlideFont), which doubles as its measurement provider.

/// Drawing surface for a single slide.
pub mod canvas;
/// Fonts that can both measure and paint text.
pub mod font;
/// Region rectangles derived from the canvas and theme.
pub mod geometry;
/// Cover, item and ending slide templates.
pub mod renderer;
/// Finished slide bitmaps and their PNG form.
pub mod slide;

pub use canvas::SlideCanvas;
pub use font::{BlockFace, ParleyFont, SlideFont};
pub use renderer::SlideRenderer;
pub use slide::{Slide, slide_file_name};
