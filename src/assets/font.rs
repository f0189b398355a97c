use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Raw bytes of a TrueType/OpenType font file.
#[derive(Clone, Debug)]
pub struct FontResource {
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
}

impl FontResource {
    /// Read a font file. A missing or empty file is a fatal [`SlidecastError::Font`].
    pub fn load(path: &Path) -> SlidecastResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            SlidecastError::font(format!("failed to read font '{}': {e}", path.display()))
        })?;
        if bytes.is_empty() {
            return Err(SlidecastError::font(format!(
                "font file '{}' is empty",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
            bytes: Arc::new(bytes),
        })
    }

    /// Path the font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Font file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
