//! Build configuration.
//!
//! A [`BuildConfig`] is constructed once by the caller and passed explicitly to every stage.
//! Every field has a default, so a config file only needs the values it overrides.

use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Fps, Rgba8, secs_to_duration};
use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Top-level configuration for one video build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output frame size.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Quiet padding before and after every narration clip, in seconds.
    pub silence_secs: f64,
    /// Slide styling and geometry.
    pub theme: SlideTheme,
    /// Encoder settings.
    pub encode: EncodeSettings,
    /// Logging settings (consumed by the binary).
    pub logging: LoggingConfig,
}

/// Colors, font sizes and region proportions for every slide template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideTheme {
    /// Canvas fill.
    pub background: Rgba8,
    /// Text color.
    pub text_color: Rgba8,
    /// Cover divider color.
    pub divider_color: Rgba8,
    /// Show title drawn on the cover and ending slides.
    pub show_title: String,
    /// Prefix of the source citation line.
    pub source_label: String,

    /// Left/right margin as a fraction of canvas width.
    pub margin_x_frac: f64,
    /// Top/bottom margin as a fraction of canvas height.
    pub margin_y_frac: f64,

    /// Cover title font size (px).
    pub cover_title_size: f32,
    /// Vertical nudge of the cover title (px).
    pub cover_title_y_offset: f64,
    /// Cover date font size (px).
    pub cover_date_size: f32,
    /// Gap between title and date (px).
    pub cover_date_y_offset: f64,
    /// Cover divider stroke width (px).
    pub cover_divider_width: f64,
    /// Table-of-contents font size (px).
    pub toc_size: f32,
    /// TOC inset from the divider (px).
    pub toc_x_offset: f64,
    /// TOC inset from the top margin (px).
    pub toc_y_offset: f64,

    /// Item caption font size (px).
    pub caption_size: f32,
    /// Caption region height as a fraction of canvas height.
    pub caption_height_frac: f64,
    /// Gap between caption and body as a fraction of canvas height.
    pub caption_body_gap_frac: f64,
    /// Body font size (px).
    pub body_size: f32,
    /// Body region height as a fraction of canvas height.
    pub body_height_frac: f64,
    /// Body line spacing.
    pub body_line_spacing: f64,
    /// Gap between body and source citation as a fraction of canvas height.
    pub body_source_gap_frac: f64,
    /// Source citation font size (px).
    pub source_size: f32,
    /// Line spacing for every box other than the body.
    pub line_spacing: f64,
}

/// Settings forwarded to the encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeSettings {
    /// Encoder thread count (`0` lets ffmpeg decide).
    pub threads: u32,
    /// Overwrite an existing output file.
    pub overwrite: bool,
    /// ffmpeg video codec name.
    pub video_codec: String,
    /// ffmpeg audio codec name.
    pub audio_codec: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "slidecast=debug,warn").
    pub level: String,
    /// Emit structured JSON logs.
    pub json: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: Fps::default(),
            silence_secs: 1.0,
            theme: SlideTheme::default(),
            encode: EncodeSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SlideTheme {
    fn default() -> Self {
        Self {
            background: Rgba8::WHITE,
            text_color: Rgba8::BLACK,
            divider_color: Rgba8::rgb(0xee, 0xee, 0xee),
            show_title: "《十分热》每日新闻".to_owned(),
            source_label: "来源：".to_owned(),
            margin_x_frac: 0.06,
            margin_y_frac: 0.08,
            cover_title_size: 38.0,
            cover_title_y_offset: -10.0,
            cover_date_size: 18.0,
            cover_date_y_offset: 20.0,
            cover_divider_width: 5.0,
            toc_size: 18.0,
            toc_x_offset: 30.0,
            toc_y_offset: 10.0,
            caption_size: 28.0,
            caption_height_frac: 0.07,
            caption_body_gap_frac: 0.03,
            body_size: 25.0,
            body_height_frac: 0.66,
            body_line_spacing: 0.5,
            body_source_gap_frac: 0.03,
            source_size: 18.0,
            line_spacing: 0.25,
        }
    }
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            threads: 4,
            overwrite: true,
            video_codec: "libx264".to_owned(),
            audio_codec: "aac".to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl BuildConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> SlidecastResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text).map_err(|e| {
            SlidecastError::serde(format!("parse config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check invariants the rest of the pipeline relies on.
    pub fn validate(&self) -> SlidecastResult<()> {
        self.canvas.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        self.silence()?;
        self.theme.validate()?;
        Ok(())
    }

    /// Silence padding as a [`Duration`].
    pub fn silence(&self) -> SlidecastResult<Duration> {
        secs_to_duration(self.silence_secs)
            .map_err(|_| SlidecastError::validation("silence_secs must be finite and >= 0"))
    }
}

impl SlideTheme {
    /// Reject sizes and proportions that cannot produce a slide.
    pub fn validate(&self) -> SlidecastResult<()> {
        let sizes = [
            ("cover_title_size", self.cover_title_size),
            ("cover_date_size", self.cover_date_size),
            ("toc_size", self.toc_size),
            ("caption_size", self.caption_size),
            ("body_size", self.body_size),
            ("source_size", self.source_size),
        ];
        for (name, v) in sizes {
            if !v.is_finite() || v <= 0.0 {
                return Err(SlidecastError::validation(format!(
                    "theme.{name} must be finite and > 0"
                )));
            }
        }

        let fracs = [
            ("margin_x_frac", self.margin_x_frac),
            ("margin_y_frac", self.margin_y_frac),
            ("caption_height_frac", self.caption_height_frac),
            ("caption_body_gap_frac", self.caption_body_gap_frac),
            ("body_height_frac", self.body_height_frac),
            ("body_source_gap_frac", self.body_source_gap_frac),
        ];
        for (name, v) in fracs {
            if !(0.0..1.0).contains(&v) {
                return Err(SlidecastError::validation(format!(
                    "theme.{name} must be in [0, 1)"
                )));
            }
        }

        for (name, v) in [
            ("line_spacing", self.line_spacing),
            ("body_line_spacing", self.body_line_spacing),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SlidecastError::validation(format!(
                    "theme.{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
