use std::time::Duration;

use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::timeline::model::{SegmentKind, TimedSegment, Timeline};

/// Sequential scheduler that pads every narration clip with `silence` on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineBuilder {
    silence: Duration,
}

impl TimelineBuilder {
    /// Create a builder with the given padding.
    pub fn new(silence: Duration) -> Self {
        Self { silence }
    }

    /// Schedule the cover, every item and the ending, in that order.
    ///
    /// Slide windows are back to back from zero, and the total length is the sum of all
    /// narration durations plus `2 * silence` per segment.
    pub fn build(
        &self,
        cover: Duration,
        items: &[Duration],
        ending: Duration,
    ) -> SlidecastResult<Timeline> {
        let kinds = std::iter::once(SegmentKind::Cover)
            .chain((0..items.len()).map(SegmentKind::Item))
            .chain(std::iter::once(SegmentKind::Ending));
        let durations = std::iter::once(cover)
            .chain(items.iter().copied())
            .chain(std::iter::once(ending));

        let mut t = Duration::ZERO;
        let mut segments = Vec::with_capacity(items.len() + 2);
        for (ordinal, (kind, d)) in kinds.zip(durations).enumerate() {
            let video_start = t;
            let video_duration = self.padded(d)?;
            t = checked_add(t, self.silence)?;
            let audio_start = t;
            t = checked_add(checked_add(t, d)?, self.silence)?;

            tracing::debug!(
                ordinal,
                ?kind,
                video_start = video_start.as_secs_f64(),
                video_duration = video_duration.as_secs_f64(),
                audio_start = audio_start.as_secs_f64(),
                "scheduled segment"
            );
            segments.push(TimedSegment {
                ordinal,
                kind,
                video_start,
                video_duration,
                audio_start,
                audio_duration: d,
            });
        }

        Ok(Timeline {
            segments,
            silence: self.silence,
        })
    }

    fn padded(&self, d: Duration) -> SlidecastResult<Duration> {
        d.checked_add(self.silence)
            .and_then(|v| v.checked_add(self.silence))
            .ok_or_else(|| SlidecastError::validation("segment duration overflows"))
    }
}

fn checked_add(a: Duration, b: Duration) -> SlidecastResult<Duration> {
    a.checked_add(b)
        .ok_or_else(|| SlidecastError::validation("timeline duration overflows"))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
