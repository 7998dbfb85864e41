//! Output directory layout and file writing.

use std::fs;
use std::path::{Path, PathBuf};

use blueprint_core::paths::relative_path;
use blueprint_core::{Format, Name, OutputKind};

use crate::error::{ExportError, ExportResult};

/// Output directory of a blueprint build.
///
/// ```text
/// <base>/
/// ├── module/   # One document per module, nested by name components
/// └── library/  # Library indexes referencing module documents
/// ```
#[derive(Debug, Clone)]
pub struct OutputLayout {
    base_dir: PathBuf,
}

impl OutputLayout {
    /// Create a layout rooted at `base_dir`. Nothing is created on disk yet.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Deterministic path of a document.
    pub fn path_for(&self, kind: OutputKind, name: &Name, format: Format) -> PathBuf {
        self.base_dir
            .join(relative_path(kind, name, format.extension()))
    }

    /// Write a document, creating parent directories and replacing any
    /// existing file.
    pub fn write(
        &self,
        kind: OutputKind,
        name: &Name,
        content: &str,
        format: Format,
    ) -> ExportResult<PathBuf> {
        let path = self.path_for(kind, name, format);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::WriteError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        fs::write(&path, content).map_err(|e| ExportError::WriteError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }
}
