//! Output path scheme.
//!
//! Rendered documents live under a base directory, split by kind and then by
//! the dot-separated components of the module or library name:
//!
//! ```text
//! <base>/
//! ├── module/
//! │   └── Mathlib/Algebra/Group.tex
//! └── library/
//!     └── Mathlib.json
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::node::Name;

/// Top-level segment distinguishing module documents from library indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Module,
    Library,
}

impl OutputKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            OutputKind::Module => "module",
            OutputKind::Library => "library",
        }
    }
}

/// Document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Latex,
    Json,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Latex => "tex",
            Format::Json => "json",
        }
    }
}

/// Path of a document relative to the output base directory.
pub fn relative_path(kind: OutputKind, name: &Name, extension: &str) -> PathBuf {
    let mut path = PathBuf::from(kind.dir_name());
    path.extend(name.components());
    path.set_extension(extension);
    path
}

/// `/`-separated form of [`relative_path`], prefixed by `root` if non-empty.
///
/// Used inside documents, where the platform separator must not leak.
pub fn document_path(root: &str, kind: OutputKind, name: &Name, extension: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let root = root.trim_end_matches('/');
    if !root.is_empty() {
        segments.push(root);
    }
    segments.push(kind.dir_name());
    segments.extend(name.components());
    format!("{}.{}", segments.join("/"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        let path = relative_path(OutputKind::Module, &Name::from("Mathlib.Algebra.Group"), "tex");
        assert_eq!(path, PathBuf::from("module/Mathlib/Algebra/Group.tex"));

        let path = relative_path(OutputKind::Library, &Name::from("Mathlib"), "json");
        assert_eq!(path, PathBuf::from("library/Mathlib.json"));
    }

    #[test]
    fn test_document_path() {
        let name = Name::from("A.B");
        assert_eq!(
            document_path("", OutputKind::Module, &name, "tex"),
            "module/A/B.tex"
        );
        assert_eq!(
            document_path("blueprint/gen/", OutputKind::Library, &name, "json"),
            "blueprint/gen/library/A/B.json"
        );
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(Format::default().extension(), "tex");
        assert_eq!(Format::Json.extension(), "json");
    }
}
