use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;

use crate::assets::media::{AudioClip, AudioProbe, PcmDecoder, resolve_clip};
use crate::build::workspace::BuildWorkspace;
use crate::compose::composer::{ComposeStats, CompositionInputs, VideoComposer};
use crate::compose::output::PendingOutput;
use crate::config::BuildConfig;
use crate::content::ContentItem;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir};
use crate::encode::sink::FrameSink;
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::slides::font::SlideFont;
use crate::slides::renderer::SlideRenderer;
use crate::slides::slide::slide_file_name;
use crate::timeline::builder::TimelineBuilder;
use crate::timeline::model::Timeline;

/// Inputs of one build.
#[derive(Clone, Copy, Debug)]
pub struct BuildRequest<'a> {
    /// Items in presentation order, each with narration attached.
    pub items: &'a [ContentItem],
    /// Narration for the cover slide.
    pub cover_audio: &'a Path,
    /// Narration for the ending slide.
    pub ending_audio: &'a Path,
    /// Date printed on the cover.
    pub date: &'a str,
    /// Where to keep a copy of the rendered cover.
    pub cover_path: &'a Path,
}

/// What a finished build produced.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildReport {
    /// The schedule the video follows.
    pub timeline: Timeline,
    /// Composer counters.
    pub stats: ComposeStats,
    /// Copy of the cover slide.
    pub cover_path: PathBuf,
    /// Final video path, for builds that encode to a file.
    pub output: Option<PathBuf>,
}

/// Resolve every narration clip in playback order: cover, items, ending.
///
/// Fails on the first item without narration or the first unreadable file.
pub fn resolve_clips(
    probe: &dyn AudioProbe,
    items: &[ContentItem],
    cover_audio: &Path,
    ending_audio: &Path,
) -> SlidecastResult<Vec<AudioClip>> {
    let mut clips = Vec::with_capacity(items.len() + 2);
    clips.push(resolve_clip(probe, cover_audio)?);
    for item in items {
        clips.push(resolve_clip(probe, item.require_audio_path()?)?);
    }
    clips.push(resolve_clip(probe, ending_audio)?);
    Ok(clips)
}

/// Schedule clips resolved by [`resolve_clips`]: the first is the cover, the last the ending.
pub fn schedule_clips(silence: Duration, clips: &[AudioClip]) -> SlidecastResult<Timeline> {
    let durations: Vec<Duration> = clips.iter().map(|c| c.duration).collect();
    let Some((&cover, rest)) = durations.split_first() else {
        return Err(SlidecastError::validation("no narration clips to schedule"));
    };
    let Some((&ending, items)) = rest.split_last() else {
        return Err(SlidecastError::validation(
            "narration clips must include cover and ending",
        ));
    };
    TimelineBuilder::new(silence).build(cover, items, ending)
}

/// One build, from content items to an encoded video.
///
/// Each build owns its workspace; nothing is shared between builds.
pub struct VideoBuild<'a, F: SlideFont + ?Sized> {
    config: &'a BuildConfig,
    font: &'a mut F,
    probe: &'a dyn AudioProbe,
    decoder: &'a dyn PcmDecoder,
}

impl<'a, F: SlideFont + ?Sized> VideoBuild<'a, F> {
    /// Bundle the configuration and collaborators for a build.
    pub fn new(
        config: &'a BuildConfig,
        font: &'a mut F,
        probe: &'a dyn AudioProbe,
        decoder: &'a dyn PcmDecoder,
    ) -> Self {
        Self {
            config,
            font,
            probe,
            decoder,
        }
    }

    /// Render cover, item and ending slides as PNGs named by ordinal into `dir`.
    ///
    /// Slides are rendered and written one at a time. Returns the paths in playback order.
    pub fn render_slides_into(
        &mut self,
        items: &[ContentItem],
        date: &str,
        dir: &Path,
    ) -> SlidecastResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create slide directory '{}'", dir.display()))?;
        let config = self.config;
        let mut renderer = SlideRenderer::new(&mut *self.font, &config.theme, config.canvas);
        let mut paths = Vec::with_capacity(items.len() + 2);

        let cover = dir.join(slide_file_name(0));
        renderer.render_cover(items, date)?.save_png(&cover)?;
        tracing::info!(path = %cover.display(), "exported cover slide");
        paths.push(cover);

        for (i, item) in items.iter().enumerate() {
            let path = dir.join(slide_file_name(i + 1));
            renderer
                .render_item(item, i, items.len())?
                .save_png(&path)?;
            tracing::info!(title = item.title(), path = %path.display(), "exported item slide");
            paths.push(path);
        }

        let ending = dir.join(slide_file_name(items.len() + 1));
        renderer.render_ending(items, date)?.save_png(&ending)?;
        tracing::info!(path = %ending.display(), "exported ending slide");
        paths.push(ending);
        Ok(paths)
    }

    /// Run the whole build into `sink`.
    ///
    /// All audio is resolved before anything is rendered. Intermediate files live in a scoped
    /// workspace that is removed when this returns, successfully or not. The cover copy only
    /// appears at `req.cover_path` once composition succeeded.
    pub fn run<S: FrameSink + ?Sized>(
        &mut self,
        req: &BuildRequest<'_>,
        sink: &mut S,
    ) -> SlidecastResult<BuildReport> {
        let (report, cover) = self.compose_into(req, sink)?;
        cover.commit()?;
        Ok(report)
    }

    /// Run the build and encode it to `output` with the system `ffmpeg`.
    ///
    /// The encoder writes a sibling partial file that is renamed onto `output` only after it
    /// exits cleanly, so a failed build leaves neither a video nor a cover behind.
    pub fn run_to_file(
        &mut self,
        req: &BuildRequest<'_>,
        output: &Path,
    ) -> SlidecastResult<BuildReport> {
        ensure_parent_dir(output)?;
        let pending = PendingOutput::new(output, self.config.encode.overwrite)?;
        let mut opts = FfmpegSinkOpts::new(
            pending.partial_path(),
            &self.config.encode,
            self.config.theme.background,
        );
        opts.overwrite = true;
        let mut sink = FfmpegSink::new(opts);

        let (mut report, cover) = self.compose_into(req, &mut sink)?;
        drop(sink);
        let output = pending.commit()?;
        cover.commit()?;
        tracing::info!(path = %output.display(), "video written");
        report.output = Some(output);
        Ok(report)
    }

    /// Everything up to a composed sink. The cover copy is returned uncommitted.
    #[tracing::instrument(skip_all, fields(items = req.items.len(), date = req.date))]
    fn compose_into<S: FrameSink + ?Sized>(
        &mut self,
        req: &BuildRequest<'_>,
        sink: &mut S,
    ) -> SlidecastResult<(BuildReport, PendingOutput)> {
        self.config.validate()?;
        let clips = resolve_clips(self.probe, req.items, req.cover_audio, req.ending_audio)?;

        let workspace = BuildWorkspace::new()?;
        let slides = self.render_slides_into(req.items, req.date, workspace.path())?;
        ensure_parent_dir(req.cover_path)?;
        let cover = PendingOutput::new(req.cover_path, true)?;
        std::fs::copy(&slides[0], cover.partial_path()).with_context(|| {
            format!("copy cover slide to '{}'", cover.partial_path().display())
        })?;

        let timeline = schedule_clips(self.config.silence()?, &clips)?;

        let composer = VideoComposer::new(
            self.config.canvas,
            self.config.fps,
            self.config.theme.background,
        )?;
        let track_path = workspace.audio_track_path();
        let stats = composer.compose(
            CompositionInputs {
                timeline: &timeline,
                slides: &slides,
                clips: &clips,
                track_path: &track_path,
            },
            self.decoder,
            sink,
        )?;

        tracing::info!(
            duration_secs = timeline.total_duration().as_secs_f64(),
            frames = stats.frames_total,
            "build composed"
        );
        let report = BuildReport {
            timeline,
            stats,
            cover_path: req.cover_path.to_path_buf(),
            output: None,
        };
        Ok((report, cover))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/pipeline.rs"]
mod tests;
