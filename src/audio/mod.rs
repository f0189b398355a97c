//! Narration track assembly.

/// Sequential `f32le` track writer.
pub mod track;

pub use crate::assets::media::{AudioClip, AudioPcm, AudioProbe, FfmpegAudio, PcmDecoder};
pub use track::{NarrationTrack, write_narration_track, write_track_to};
