//! Slidecast turns a list of narrated news items into a single slideshow video.
//!
//! A build runs strictly in sequence:
//!
//! - Resolve every narration clip's duration (missing audio is fatal)
//! - Render the cover, one slide per item, and the ending with the [`TextLayoutEngine`]
//! - Schedule slides and narration with the [`TimelineBuilder`]
//! - Compose frames and the narration track into a [`FrameSink`] with the [`VideoComposer`]
//!
//! [`VideoBuild`] wires these stages together; the stages are also usable on their own.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Image, font and audio inputs.
pub mod assets;
/// Narration track assembly.
pub mod audio;
/// Build orchestration and scoped workspace.
pub mod build;
/// Interfaces to fetch, summarize, speech and upload collaborators.
pub mod collab;
/// Frame composition and atomic output.
pub mod compose;
/// Build configuration.
pub mod config;
/// Content items and descriptions.
pub mod content;
/// Frame sinks.
pub mod encode;
mod foundation;
/// Greedy character-level text layout.
pub mod layout;
/// Tracing subscriber setup.
pub mod logging;
/// Slide rasterization.
pub mod slides;
/// Slide and narration scheduling.
pub mod timeline;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, Point, Rect, Rgba8, duration_to_samples,
    samples_to_duration, secs_to_duration,
};
pub use crate::foundation::error::{SlidecastError, SlidecastResult};

pub use crate::assets::font::FontResource;
pub use crate::assets::media::{AudioClip, AudioProbe, FfmpegAudio, PcmDecoder};
pub use crate::build::{BuildReport, BuildRequest, BuildWorkspace, VideoBuild};
pub use crate::compose::{ComposeStats, CompositionInputs, PendingOutput, VideoComposer};
pub use crate::config::{BuildConfig, EncodeSettings, LoggingConfig, SlideTheme};
pub use crate::content::{ContentItem, ContentItemBuilder, DescriptionHeader};
pub use crate::encode::{FfmpegSink, FfmpegSinkOpts, FrameRgba, FrameSink, InMemorySink};
pub use crate::layout::engine::{LayoutBox, TextLayout, TextLayoutEngine};
pub use crate::layout::metrics::{FontMetrics, FontSpec, TextExtent};
pub use crate::slides::{BlockFace, ParleyFont, Slide, SlideFont, SlideRenderer};
pub use crate::timeline::{SegmentKind, TimedSegment, Timeline, TimelineBuilder};
