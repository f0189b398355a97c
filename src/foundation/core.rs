use std::time::Duration;

use crate::foundation::error::{SlidecastError, SlidecastResult};

pub use kurbo::{Affine, Point, Rect};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Absolute 0-based frame index in output timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SlidecastResult<Self> {
        if den == 0 {
            return Err(SlidecastError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SlidecastError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Number of frames needed to cover `duration`, rounding partial frames up.
    pub fn frames_covering(self, duration: Duration) -> u64 {
        let num = duration.as_nanos() * u128::from(self.num);
        let den = NANOS_PER_SEC * u128::from(self.den);
        num.div_ceil(den) as u64
    }

    /// Presentation time of frame `idx`.
    pub fn frame_time(self, idx: FrameIndex) -> Duration {
        let nanos = u128::from(idx.0) * u128::from(self.den) * NANOS_PER_SEC / u128::from(self.num);
        nanos_to_duration(nanos)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 50, den: 1 }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject sizes the rasterizer or the yuv420p encoder cannot handle.
    pub fn validate(self) -> SlidecastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SlidecastError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(SlidecastError::validation(
                "canvas width/height must be even (required for yuv420p output)",
            ));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(SlidecastError::validation(
                "canvas width/height must fit in u16",
            ));
        }
        Ok(())
    }

    /// Byte length of one tightly packed RGBA8 frame.
    pub fn rgba_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    /// Canvas width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Canvas height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Premultiplied `[r, g, b, a]`.
    pub fn to_premul_array(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// Convert a sample count back to a duration at `sample_rate`.
pub fn samples_to_duration(samples: u64, sample_rate: u32) -> Duration {
    let nanos = u128::from(samples) * NANOS_PER_SEC / u128::from(sample_rate.max(1));
    nanos_to_duration(nanos)
}

/// Convert a timeline position to the nearest sample index at `sample_rate`.
pub fn duration_to_samples(d: Duration, sample_rate: u32) -> u64 {
    let num = d.as_nanos() * u128::from(sample_rate);
    ((num + NANOS_PER_SEC / 2) / NANOS_PER_SEC) as u64
}

/// Parse a non-negative, finite number of seconds.
pub fn secs_to_duration(secs: f64) -> SlidecastResult<Duration> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| SlidecastError::validation(format!("invalid duration {secs}s: {e}")))
}

fn nanos_to_duration(nanos: u128) -> Duration {
    let secs = (nanos / NANOS_PER_SEC) as u64;
    let sub = (nanos % NANOS_PER_SEC) as u32;
    Duration::new(secs, sub)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
