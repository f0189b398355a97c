use std::path::PathBuf;

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::SlidecastResult;

/// One composed frame in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 pixels.
    pub data: Vec<u8>,
}

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Total frames that will be pushed.
    pub frame_count: u64,
    /// Optional raw PCM audio input.
    pub audio: Option<AudioInputConfig>,
}

/// Raw PCM audio input for sinks that mux audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioInputConfig {
    /// Path to interleaved `f32le` PCM data.
    pub path: PathBuf,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
}

/// Sink contract for consuming composed frames in timeline order.
///
/// `push_frame` is called with strictly increasing, gap-free frame indices starting at zero.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SlidecastResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> SlidecastResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SlidecastResult<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn begin(&mut self, cfg: SinkConfig) -> SlidecastResult<()> {
        (**self).begin(cfg)
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> SlidecastResult<()> {
        (**self).push_frame(idx, frame)
    }

    fn end(&mut self) -> SlidecastResult<()> {
        (**self).end()
    }
}

/// In-memory sink for tests and previews.
///
/// Consecutive identical frames are stored once, so a long slideshow stays cheap to capture.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    runs: Vec<(FrameIndex, u64, FrameRgba)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Total frames received.
    pub fn frame_count(&self) -> u64 {
        self.runs.iter().map(|(_, n, _)| n).sum()
    }

    /// Runs of identical frames as `(first index, length, frame)`.
    pub fn runs(&self) -> &[(FrameIndex, u64, FrameRgba)] {
        &self.runs
    }

    /// Frame at `idx`, if one was pushed.
    pub fn frame(&self, idx: FrameIndex) -> Option<&FrameRgba> {
        self.runs
            .iter()
            .find(|(start, n, _)| idx.0 >= start.0 && idx.0 < start.0 + n)
            .map(|(_, _, f)| f)
    }

    /// `true` once `end` was called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SlidecastResult<()> {
        self.cfg = Some(cfg);
        self.runs.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> SlidecastResult<()> {
        if let Some((start, n, last)) = self.runs.last_mut()
            && start.0 + *n == idx.0
            && *last == *frame
        {
            *n += 1;
            return Ok(());
        }
        self.runs.push((idx, 1, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SlidecastResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
