//! Encoding sinks.
//!
//! Sinks consume composed frames in timeline order. The composer never talks to an encoder
//! directly, so tests can swap in [`InMemorySink`](sink::InMemorySink).

/// `ffmpeg`-based MP4 sink.
pub mod ffmpeg;
/// Frame sink trait and the in-memory sink.
pub mod sink;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use sink::{AudioInputConfig, FrameRgba, FrameSink, InMemorySink, SinkConfig};
