//! End-to-end build: resolve audio, render slides, schedule, compose.

/// Orchestration of a single build.
pub mod pipeline;
/// Scoped scratch directory for intermediate files.
pub mod workspace;

pub use pipeline::{BuildReport, BuildRequest, VideoBuild, resolve_clips, schedule_clips};
pub use workspace::BuildWorkspace;
