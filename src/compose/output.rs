use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{SlidecastError, SlidecastResult};

/// An output file that only appears under its final name once complete.
///
/// Writers target [`partial_path`](Self::partial_path); [`commit`](Self::commit) renames it onto
/// the final path. Dropping an uncommitted output removes the partial file.
#[derive(Debug)]
pub struct PendingOutput {
    final_path: PathBuf,
    partial_path: PathBuf,
    committed: bool,
}

impl PendingOutput {
    /// Reserve `final_path`, failing early if it exists and `overwrite` is off.
    pub fn new(final_path: impl Into<PathBuf>, overwrite: bool) -> SlidecastResult<Self> {
        let final_path = final_path.into();
        if !overwrite && final_path.exists() {
            return Err(SlidecastError::validation(format!(
                "output file '{}' already exists",
                final_path.display()
            )));
        }
        let partial_path = partial_path_for(&final_path)?;
        if partial_path.exists() {
            std::fs::remove_file(&partial_path).with_context(|| {
                format!("remove stale partial output '{}'", partial_path.display())
            })?;
        }
        Ok(Self {
            final_path,
            partial_path,
            committed: false,
        })
    }

    /// Path the writer should produce.
    pub fn partial_path(&self) -> &Path {
        &self.partial_path
    }

    /// Destination after commit.
    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    /// Move the finished partial file onto the final path.
    pub fn commit(mut self) -> SlidecastResult<PathBuf> {
        if !self.partial_path.is_file() {
            return Err(SlidecastError::encode(format!(
                "nothing was written to '{}'",
                self.partial_path.display()
            )));
        }
        std::fs::rename(&self.partial_path, &self.final_path).with_context(|| {
            format!(
                "rename '{}' to '{}'",
                self.partial_path.display(),
                self.final_path.display()
            )
        })?;
        self.committed = true;
        Ok(self.final_path.clone())
    }
}

impl Drop for PendingOutput {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.partial_path);
        }
    }
}

/// `<stem>.partial.<ext>` next to `path`, or `<name>.partial` without an extension.
fn partial_path_for(path: &Path) -> SlidecastResult<PathBuf> {
    let stem = path.file_stem().ok_or_else(|| {
        SlidecastError::validation(format!("output path '{}' has no file name", path.display()))
    })?;
    let mut name = OsString::from(stem);
    name.push(".partial");
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(path.with_file_name(name))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/output.rs"]
mod tests;
