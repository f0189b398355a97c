use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::foundation::core::{samples_to_duration, secs_to_duration};
use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Sample rate of the mixed narration track.
pub const MIX_SAMPLE_RATE: u32 = 48_000;
/// Channel count of the mixed narration track.
pub const MIX_CHANNELS: u16 = 2;

/// A narration file whose duration has already been resolved.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AudioClip {
    /// Source file.
    pub path: PathBuf,
    /// Playback length.
    pub duration: Duration,
}

/// Decoded interleaved floating-point PCM.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioPcm {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Interleaved `f32` PCM samples.
    pub interleaved_f32: Vec<f32>,
}

impl AudioPcm {
    /// Number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.interleaved_f32.len() / usize::from(self.channels.max(1))
    }

    /// Playback length implied by the sample count.
    pub fn duration(&self) -> Duration {
        samples_to_duration(self.frames() as u64, self.sample_rate)
    }
}

/// Resolves the playback length of an audio file.
pub trait AudioProbe {
    /// Duration of the audio stream in `path`.
    fn duration(&self, path: &Path) -> SlidecastResult<Duration>;
}

/// Decodes an audio file to interleaved stereo `f32` PCM.
pub trait PcmDecoder {
    /// Decode `path`, resampled to `sample_rate`.
    fn decode_stereo(&self, path: &Path, sample_rate: u32) -> SlidecastResult<AudioPcm>;
}

/// Check that `path` exists, then probe it into an [`AudioClip`].
///
/// Every failure here is fatal: without a duration the clip cannot be scheduled.
pub fn resolve_clip(probe: &dyn AudioProbe, path: &Path) -> SlidecastResult<AudioClip> {
    if !path.is_file() {
        return Err(SlidecastError::audio(format!(
            "audio file '{}' does not exist or is not a file",
            path.display()
        )));
    }
    let duration = probe.duration(path)?;
    Ok(AudioClip {
        path: path.to_path_buf(),
        duration,
    })
}

/// [`AudioProbe`] and [`PcmDecoder`] backed by the system `ffprobe`/`ffmpeg` binaries.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegAudio;

impl AudioProbe for FfmpegAudio {
    fn duration(&self, path: &Path) -> SlidecastResult<Duration> {
        #[derive(serde::Deserialize)]
        struct ProbeFormat {
            duration: Option<String>,
        }
        #[derive(serde::Deserialize)]
        struct ProbeOut {
            format: ProbeFormat,
        }

        let out = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "json",
            ])
            .arg(path)
            .output()
            .map_err(|e| SlidecastError::audio(format!("failed to run ffprobe: {e}")))?;
        if !out.status.success() {
            return Err(SlidecastError::audio(format!(
                "ffprobe failed for '{}': {}",
                path.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
            .map_err(|e| SlidecastError::audio(format!("ffprobe json parse failed: {e}")))?;
        let raw = parsed.format.duration.ok_or_else(|| {
            SlidecastError::audio(format!("ffprobe reported no duration for '{}'", path.display()))
        })?;
        let secs: f64 = raw.trim().parse().map_err(|_| {
            SlidecastError::audio(format!("ffprobe duration '{raw}' is not a number"))
        })?;
        secs_to_duration(secs).map_err(|e| SlidecastError::audio(e.to_string()))
    }
}

impl PcmDecoder for FfmpegAudio {
    fn decode_stereo(&self, path: &Path, sample_rate: u32) -> SlidecastResult<AudioPcm> {
        let out = Command::new("ffmpeg")
            .args(["-v", "error", "-i"])
            .arg(path)
            .args([
                "-vn",
                "-f",
                "f32le",
                "-acodec",
                "pcm_f32le",
                "-ac",
                "2",
                "-ar",
                &sample_rate.to_string(),
                "pipe:1",
            ])
            .output()
            .map_err(|e| {
                SlidecastError::audio(format!("failed to run ffmpeg for audio decode: {e}"))
            })?;

        if !out.status.success() {
            return Err(SlidecastError::audio(format!(
                "ffmpeg audio decode failed for '{}': {}",
                path.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        if !out.stdout.len().is_multiple_of(4) {
            return Err(SlidecastError::audio(
                "decoded audio byte length is not aligned to f32 samples",
            ));
        }

        let interleaved_f32 = out
            .stdout
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(AudioPcm {
            sample_rate,
            channels: MIX_CHANNELS,
            interleaved_f32,
        })
    }
}

/// Return `true` when `ffmpeg` and `ffprobe` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    ["ffmpeg", "ffprobe"].iter().all(|tool| {
        Command::new(tool)
            .arg("-version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/media.rs"]
mod tests;
