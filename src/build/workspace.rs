use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::SlidecastResult;

/// Private scratch directory for one build.
///
/// Slide PNGs and the narration track live here. Dropping the workspace deletes the directory
/// and everything in it, whether the build finished or failed halfway.
#[derive(Debug)]
pub struct BuildWorkspace {
    dir: tempfile::TempDir,
}

impl BuildWorkspace {
    /// Create a fresh workspace under the system temp directory.
    pub fn new() -> SlidecastResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix("slidecast-")
            .tempdir()
            .context("create build workspace")?;
        tracing::debug!(path = %dir.path().display(), "build workspace created");
        Ok(Self { dir })
    }

    /// Root of the workspace.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the narration track is written.
    pub fn audio_track_path(&self) -> PathBuf {
        self.dir.path().join("narration.f32le")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/workspace.rs"]
mod tests;
