//! Mapping narration durations onto back-to-back slide windows.

/// Cursor-based scheduler.
pub mod builder;
/// Timeline value types.
pub mod model;

pub use builder::TimelineBuilder;
pub use model::{SegmentKind, TimedSegment, Timeline};
