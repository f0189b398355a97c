/// Result alias used across the crate.
pub type SlidecastResult<T> = Result<T, SlidecastError>;

/// Error taxonomy for a video build.
///
/// `Image` failures are recoverable and never escape slide rendering. `Font`, `Audio` and
/// `Encode` failures abort the build.
#[derive(thiserror::Error, Debug)]
pub enum SlidecastError {
    /// Invalid input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font resource is missing or unusable.
    #[error("font error: {0}")]
    Font(String),

    /// Required audio is missing, unreadable, or failed to decode.
    #[error("audio error: {0}")]
    Audio(String),

    /// Image could not be loaded or decoded.
    #[error("image error: {0}")]
    Image(String),

    /// Encoder failed to start, accept frames, or finish.
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually I/O with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlidecastError {
    /// Build a [`SlidecastError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlidecastError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`SlidecastError::Audio`].
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Build a [`SlidecastError::Image`].
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`SlidecastError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SlidecastError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for failures that must abort a build.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Image(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
