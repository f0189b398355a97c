use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Which slide a segment shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Opening slide.
    Cover,
    /// Content item, 0-based.
    Item(usize),
    /// Closing slide.
    Ending,
}

/// One slide window and the narration window nested inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimedSegment {
    /// Position in playback order; also the slide's ordinal in the build workspace.
    pub ordinal: usize,
    /// Slide shown during this segment.
    pub kind: SegmentKind,
    /// When the slide appears.
    #[serde(serialize_with = "as_secs")]
    pub video_start: Duration,
    /// How long the slide stays.
    #[serde(serialize_with = "as_secs")]
    pub video_duration: Duration,
    /// When the narration starts.
    #[serde(serialize_with = "as_secs")]
    pub audio_start: Duration,
    /// Narration length.
    #[serde(serialize_with = "as_secs")]
    pub audio_duration: Duration,
}

impl TimedSegment {
    /// Exclusive end of the slide window.
    pub fn video_end(&self) -> Duration {
        self.video_start + self.video_duration
    }

    /// Exclusive end of the narration window.
    pub fn audio_end(&self) -> Duration {
        self.audio_start + self.audio_duration
    }

    /// `true` if `t` falls in `[video_start, video_end)`.
    pub fn shows_at(&self, t: Duration) -> bool {
        t >= self.video_start && t < self.video_end()
    }
}

/// Ordered segments: cover, items, ending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Segments in playback order.
    pub segments: Vec<TimedSegment>,
    /// Padding before and after every narration clip.
    #[serde(serialize_with = "as_secs")]
    pub silence: Duration,
}

impl Timeline {
    /// End of the last slide window, zero for an empty timeline.
    pub fn total_duration(&self) -> Duration {
        self.segments
            .last()
            .map(TimedSegment::video_end)
            .unwrap_or_default()
    }

    /// Segment whose slide window contains `t`.
    pub fn segment_at(&self, t: Duration) -> Option<&TimedSegment> {
        let idx = self.segments.partition_point(|s| s.video_end() <= t);
        self.segments.get(idx).filter(|s| s.shows_at(t))
    }

    /// Check the structural guarantees every built timeline has.
    ///
    /// Windows start at zero, are contiguous, and each narration sits exactly `silence` inside
    /// its slide window.
    pub fn validate(&self) -> SlidecastResult<()> {
        let mut cursor = Duration::ZERO;
        for (i, seg) in self.segments.iter().enumerate() {
            if seg.ordinal != i {
                return Err(SlidecastError::validation(format!(
                    "segment {i} has ordinal {}",
                    seg.ordinal
                )));
            }
            if seg.video_start != cursor {
                return Err(SlidecastError::validation(format!(
                    "segment {i} starts at {:?}, expected {cursor:?}",
                    seg.video_start
                )));
            }
            if seg.audio_start != seg.video_start + self.silence
                || seg.video_duration != seg.audio_duration + self.silence * 2
            {
                return Err(SlidecastError::validation(format!(
                    "segment {i} audio window is not padded by {:?}",
                    self.silence
                )));
            }
            cursor = seg.video_end();
        }
        Ok(())
    }
}

fn as_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
