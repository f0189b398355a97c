//! Turning slides, a timeline and narration into one encoded stream.

/// Frame-by-frame composer.
pub mod composer;
/// Partial-file guard for atomic output.
pub mod output;

pub use composer::{ComposeStats, CompositionInputs, VideoComposer};
pub use output::PendingOutput;
