use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{SlidecastError, SlidecastResult};

/// One news story, immutable once built.
///
/// Enrichment stages (summary, narration audio) produce new values through the `with_*`
/// methods instead of mutating in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    title: String,
    #[serde(rename = "content", default)]
    body: String,
    #[serde(rename = "brief_content", default)]
    brief_summary: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    source_name: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default, deserialize_with = "empty_path_as_none")]
    image_path: Option<PathBuf>,
    #[serde(default, deserialize_with = "empty_path_as_none")]
    audio_path: Option<PathBuf>,
    #[serde(default)]
    publish_timestamp: f64,
    #[serde(default)]
    request_timestamp: f64,
    #[serde(default)]
    comment_count: u64,
}

impl ContentItem {
    /// Start building an item with the given title.
    pub fn builder(title: impl Into<String>) -> ContentItemBuilder {
        ContentItemBuilder::new(title)
    }

    /// Headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Full article text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Short summary shown on the item slide.
    pub fn brief_summary(&self) -> &str {
        &self.brief_summary
    }

    /// Publisher name, empty when unknown.
    pub fn source_name(&self) -> &str {
        self.source_name.as_deref().unwrap_or_default()
    }

    /// Article URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Local illustration, if any.
    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// Rendered narration, required before scheduling.
    pub fn audio_path(&self) -> Option<&Path> {
        self.audio_path.as_deref()
    }

    /// Publication time as epoch seconds.
    pub fn publish_timestamp(&self) -> f64 {
        self.publish_timestamp
    }

    /// Fetch time as epoch seconds.
    pub fn request_timestamp(&self) -> f64 {
        self.request_timestamp
    }

    /// Comment count reported by the source.
    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }

    /// Publication time, when it is a representable instant.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        epoch_secs_to_utc(self.publish_timestamp)
    }

    /// Copy with a new summary.
    pub fn with_summary(&self, summary: impl Into<String>) -> Self {
        Self {
            brief_summary: summary.into(),
            ..self.clone()
        }
    }

    /// Copy with the narration audio attached.
    pub fn with_audio_path(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            audio_path: Some(path.into()),
            ..self.clone()
        }
    }

    /// Copy with an illustration attached.
    pub fn with_image_path(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: Some(path.into()),
            ..self.clone()
        }
    }

    /// Narration path or a fatal audio error naming the item.
    pub fn require_audio_path(&self) -> SlidecastResult<&Path> {
        self.audio_path().ok_or_else(|| {
            SlidecastError::audio(format!("item '{}' has no narration audio", self.title))
        })
    }
}

/// Builder for [`ContentItem`].
#[derive(Clone, Debug)]
pub struct ContentItemBuilder {
    item: ContentItem,
}

impl ContentItemBuilder {
    /// Start with a title and every other field empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            item: ContentItem {
                title: title.into(),
                body: String::new(),
                brief_summary: String::new(),
                source_name: None,
                url: String::new(),
                image_path: None,
                audio_path: None,
                publish_timestamp: 0.0,
                request_timestamp: 0.0,
                comment_count: 0,
            },
        }
    }

    /// Set the full article text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.item.body = body.into();
        self
    }

    /// Set the summary.
    pub fn brief_summary(mut self, summary: impl Into<String>) -> Self {
        self.item.brief_summary = summary.into();
        self
    }

    /// Set the publisher name.
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.item.source_name = Some(name.into());
        self
    }

    /// Set the article URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.item.url = url.into();
        self
    }

    /// Set the illustration path.
    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.item.image_path = Some(path.into());
        self
    }

    /// Set the narration path.
    pub fn audio_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.item.audio_path = Some(path.into());
        self
    }

    /// Set publication and fetch timestamps (epoch seconds).
    pub fn timestamps(mut self, publish: f64, request: f64) -> Self {
        self.item.publish_timestamp = publish;
        self.item.request_timestamp = request;
        self
    }

    /// Set the comment count.
    pub fn comment_count(mut self, count: u64) -> Self {
        self.item.comment_count = count;
        self
    }

    /// Finish the item.
    pub fn build(self) -> ContentItem {
        self.item
    }
}

/// Read a JSON array of items.
pub fn read_items_json(path: &Path) -> SlidecastResult<Vec<ContentItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read items '{}'", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| SlidecastError::serde(format!("parse items '{}': {e}", path.display())))
}

/// Write items as a pretty-printed JSON array, creating parent directories as needed.
pub fn write_items_json(items: &[ContentItem], path: &Path) -> SlidecastResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory '{}'", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(items)
        .map_err(|e| SlidecastError::serde(format!("serialize items: {e}")))?;
    std::fs::write(path, text).with_context(|| format!("write items '{}'", path.display()))?;
    Ok(())
}

fn epoch_secs_to_utc(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(deserializer)?;
    Ok(v.filter(|s| !s.is_empty()))
}

fn empty_path_as_none<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(empty_as_none(deserializer)?.map(PathBuf::from))
}

#[cfg(test)]
#[path = "../../tests/unit/content/item.rs"]
mod tests;
