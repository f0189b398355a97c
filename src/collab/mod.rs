//! Boundaries to the collaborators around the core: fetching, summarizing, speech and upload.
//!
//! The crate ships no network implementations. These traits describe what a build expects from
//! the outside world, and the helpers here drive them over a list of items.

/// Retry helper for network-facing collaborators.
pub mod retry;
/// Spoken cover and ending scripts.
pub mod scripts;

use std::path::{Path, PathBuf};

use crate::content::ContentItem;
use crate::foundation::error::SlidecastResult;

pub use retry::RetryPolicy;
pub use scripts::{cover_script, ending_script};

/// Source of raw news items.
pub trait ContentSource {
    /// Fetch up to `limit` items, most relevant first.
    fn fetch(&mut self, limit: usize) -> SlidecastResult<Vec<ContentItem>>;
}

/// Produces the short summary shown on an item slide.
pub trait Summarizer {
    /// Copy of `item` with its summary set, or `None` if the item should be skipped.
    fn summarize(&mut self, item: &ContentItem) -> SlidecastResult<Option<ContentItem>>;
}

/// Text-to-speech engine.
pub trait SpeechSynthesizer {
    /// Speak `text` into an audio file at `out`.
    fn synthesize(&mut self, text: &str, out: &Path) -> SlidecastResult<()>;
}

/// Everything published alongside one video.
#[derive(Clone, Copy, Debug)]
pub struct Upload<'a> {
    /// Encoded video.
    pub video: &'a Path,
    /// Cover image.
    pub cover: &'a Path,
    /// Video title.
    pub title: &'a str,
    /// Plain-text description.
    pub description: &'a str,
}

/// Publishes finished videos.
pub trait VideoUploader {
    /// Upload one video with its cover and description.
    fn upload(&mut self, upload: &Upload<'_>) -> SlidecastResult<()>;
}

/// Summarize every item, keeping only those the summarizer accepted.
///
/// Errors on individual items are logged and the item is dropped.
pub fn summarize_all(summarizer: &mut dyn Summarizer, items: &[ContentItem]) -> Vec<ContentItem> {
    items
        .iter()
        .filter_map(|item| match summarizer.summarize(item) {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!(
                    title = item.title(),
                    error = %e,
                    "summary failed, dropping item"
                );
                None
            }
        })
        .collect()
}

/// Speak each item's summary into `audio_dir/{index:03}.mp3` and attach the file.
///
/// Items whose synthesis fails are logged and dropped.
pub fn narrate_all(
    tts: &mut dyn SpeechSynthesizer,
    items: &[ContentItem],
    audio_dir: &Path,
) -> Vec<ContentItem> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let path: PathBuf = audio_dir.join(format!("{i:03}.mp3"));
            match tts.synthesize(item.brief_summary(), &path) {
                Ok(()) => Some(item.with_audio_path(path)),
                Err(e) => {
                    tracing::warn!(
                        title = item.title(),
                        error = %e,
                        "speech failed, dropping item"
                    );
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/collab/mod.rs"]
mod tests;
