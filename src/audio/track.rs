use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::assets::media::{AudioClip, MIX_CHANNELS, MIX_SAMPLE_RATE, PcmDecoder};
use crate::foundation::core::duration_to_samples;
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::timeline::model::Timeline;

/// A raw interleaved `f32le` narration track on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrationTrack {
    /// Track file.
    pub path: PathBuf,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
    /// Sample frames written.
    pub frames: u64,
}

/// Write the narration track for `timeline` into `path`.
///
/// See [`write_track_to`].
pub fn write_narration_track(
    timeline: &Timeline,
    clips: &[AudioClip],
    decoder: &dyn PcmDecoder,
    path: &Path,
) -> SlidecastResult<NarrationTrack> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create audio track '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    let frames = write_track_to(timeline, clips, decoder, &mut out)?;
    out.flush()
        .with_context(|| format!("flush audio track '{}'", path.display()))?;
    Ok(NarrationTrack {
        path: path.to_path_buf(),
        sample_rate: MIX_SAMPLE_RATE,
        channels: MIX_CHANNELS,
        frames,
    })
}

/// Stream a full-length stereo track to `out`, returning the number of sample frames.
///
/// The track is silent except where a clip is scheduled. `clips[i]` belongs to segment `i`.
/// Each clip is decoded on its own, then zero-padded or cut so it fills exactly the samples
/// between its scheduled start and end.
pub fn write_track_to<W: Write>(
    timeline: &Timeline,
    clips: &[AudioClip],
    decoder: &dyn PcmDecoder,
    out: &mut W,
) -> SlidecastResult<u64> {
    if clips.len() != timeline.segments.len() {
        return Err(SlidecastError::validation(format!(
            "{} audio clips for {} timeline segments",
            clips.len(),
            timeline.segments.len()
        )));
    }

    let channels = usize::from(MIX_CHANNELS);
    let total = duration_to_samples(timeline.total_duration(), MIX_SAMPLE_RATE);
    let mut written = 0u64;

    for (seg, clip) in timeline.segments.iter().zip(clips) {
        let start = duration_to_samples(seg.audio_start, MIX_SAMPLE_RATE);
        let end = duration_to_samples(seg.audio_end(), MIX_SAMPLE_RATE);
        write_silence(out, start.saturating_sub(written), channels)?;
        written = written.max(start);

        let pcm = decoder.decode_stereo(&clip.path, MIX_SAMPLE_RATE)?;
        if pcm.channels != MIX_CHANNELS || pcm.sample_rate != MIX_SAMPLE_RATE {
            return Err(SlidecastError::audio(format!(
                "decoder returned {} ch @ {} Hz for '{}', expected {MIX_CHANNELS} ch @ {MIX_SAMPLE_RATE} Hz",
                pcm.channels,
                pcm.sample_rate,
                clip.path.display()
            )));
        }

        let window = end.saturating_sub(written);
        let available = (pcm.frames() as u64).min(window);
        let take = available as usize * channels;
        write_samples(out, &pcm.interleaved_f32[..take])?;
        write_silence(out, window - available, channels)?;
        if (pcm.frames() as u64) != window {
            tracing::debug!(
                path = %clip.path.display(),
                decoded = pcm.frames(),
                window,
                "fitted narration clip to its window"
            );
        }
        written += window;
    }

    write_silence(out, total.saturating_sub(written), channels)?;
    Ok(written.max(total))
}

fn write_samples<W: Write>(out: &mut W, samples: &[f32]) -> SlidecastResult<()> {
    let mut bytes = Vec::<u8>::with_capacity(samples.len() * 4);
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    out.write_all(&bytes).context("write audio samples")?;
    Ok(())
}

fn write_silence<W: Write>(out: &mut W, frames: u64, channels: usize) -> SlidecastResult<()> {
    const CHUNK: [u8; 8192] = [0; 8192];
    let mut remaining = frames as usize * channels * 4;
    while remaining > 0 {
        let n = remaining.min(CHUNK.len());
        out.write_all(&CHUNK[..n]).context("write audio silence")?;
        remaining -= n;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/audio/track.rs"]
mod tests;
