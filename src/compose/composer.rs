use std::path::{Path, PathBuf};

use crate::assets::media::{AudioClip, MIX_CHANNELS, MIX_SAMPLE_RATE, PcmDecoder};
use crate::audio::track::write_narration_track;
use crate::encode::sink::{AudioInputConfig, FrameRgba, FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex, Rgba8};
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::foundation::math::premul_over_in_place;
use crate::slides::slide::Slide;
use crate::timeline::model::Timeline;

/// Everything a composition reads.
#[derive(Clone, Copy, Debug)]
pub struct CompositionInputs<'a> {
    /// Scheduled segments.
    pub timeline: &'a Timeline,
    /// Slide PNG for each segment, by ordinal.
    pub slides: &'a [PathBuf],
    /// Narration clip for each segment, by ordinal.
    pub clips: &'a [AudioClip],
    /// Where to write the intermediate narration track.
    pub track_path: &'a Path,
}

/// Counters from one composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposeStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Frames that showed a slide.
    pub frames_with_slide: u64,
    /// Slide files loaded.
    pub slides_loaded: u64,
}

/// Layers a solid background under each slide during its window and streams frames to a sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoComposer {
    canvas: Canvas,
    fps: Fps,
    background: Rgba8,
}

impl VideoComposer {
    /// Create a composer for the given output format.
    pub fn new(canvas: Canvas, fps: Fps, background: Rgba8) -> SlidecastResult<Self> {
        canvas.validate()?;
        let fps = Fps::new(fps.num, fps.den)?;
        Ok(Self {
            canvas,
            fps,
            background,
        })
    }

    /// Frames needed to cover `timeline`.
    pub fn frame_count(&self, timeline: &Timeline) -> u64 {
        self.fps.frames_covering(timeline.total_duration())
    }

    /// Write the narration track, then push every frame of the video to `sink`.
    ///
    /// Frame `f` shows whatever is visible at `f * den / num` seconds. Only one slide bitmap is
    /// held in memory at a time.
    pub fn compose<S: FrameSink + ?Sized>(
        &self,
        inputs: CompositionInputs<'_>,
        decoder: &dyn PcmDecoder,
        sink: &mut S,
    ) -> SlidecastResult<ComposeStats> {
        let timeline = inputs.timeline;
        timeline.validate()?;
        if inputs.slides.len() != timeline.segments.len() {
            return Err(SlidecastError::validation(format!(
                "{} slides for {} timeline segments",
                inputs.slides.len(),
                timeline.segments.len()
            )));
        }

        let track = write_narration_track(timeline, inputs.clips, decoder, inputs.track_path)?;
        tracing::debug!(
            path = %track.path.display(),
            frames = track.frames,
            "narration track written"
        );

        let frames_total = self.frame_count(timeline);
        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
            frame_count: frames_total,
            audio: Some(AudioInputConfig {
                path: track.path,
                sample_rate: MIX_SAMPLE_RATE,
                channels: MIX_CHANNELS,
            }),
        })?;

        let background = self.background_layer();
        let mut frame = FrameRgba {
            width: self.canvas.width,
            height: self.canvas.height,
            data: background.clone(),
        };
        let mut shown: Option<usize> = None;
        let mut stats = ComposeStats {
            frames_total,
            ..ComposeStats::default()
        };

        for f in 0..frames_total {
            let idx = FrameIndex(f);
            let seg = timeline.segment_at(self.fps.frame_time(idx));
            let wanted = seg.map(|s| s.ordinal);
            if wanted != shown {
                frame.data.copy_from_slice(&background);
                if let Some(ordinal) = wanted {
                    let slide = Slide::load_png(&inputs.slides[ordinal], self.canvas)?;
                    premul_over_in_place(&mut frame.data, &slide.rgba8_premul);
                    stats.slides_loaded += 1;
                }
                shown = wanted;
            }
            if wanted.is_some() {
                stats.frames_with_slide += 1;
            }
            sink.push_frame(idx, &frame)?;
        }

        sink.end()?;
        Ok(stats)
    }

    fn background_layer(&self) -> Vec<u8> {
        self.background
            .to_premul_array()
            .repeat(self.canvas.rgba_len() / 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
