//! Library index documents.
//!
//! A library index references its member modules' documents; it never
//! inlines their content.

use serde::{Deserialize, Serialize};

use blueprint_core::paths::document_path;
use blueprint_core::{
    Format, LatexRenderer, Name, OutputKind, Registry, RenderConfig, library_contents,
};

use crate::error::ExportResult;

/// JSON form of a library index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryIndex {
    /// Library name
    pub name: Name,

    /// JSON document path of each member, relative to the output base
    pub modules: Vec<String>,
}

impl LibraryIndex {
    pub fn new(library: &Name, members: &[Name]) -> Self {
        Self {
            name: library.clone(),
            modules: members
                .iter()
                .map(|member| {
                    document_path("", OutputKind::Module, member, Format::Json.extension())
                })
                .collect(),
        }
    }
}

/// Render a library index in the requested format.
///
/// LaTeX gets one `\input` per member in the given order; JSON lists the
/// members' document paths.
pub fn render_library_index(
    config: &RenderConfig,
    library: &Name,
    members: &[Name],
    format: Format,
) -> ExportResult<String> {
    match format {
        Format::Latex => {
            // Includes never consult the registry
            let registry = Registry::new();
            let latex = LatexRenderer::new(&registry, config)
                .render_module(library, &library_contents(members))?;
            Ok(latex)
        }
        Format::Json => {
            let index = LibraryIndex::new(library, members);
            Ok(format!("{}\n", serde_json::to_string_pretty(&index)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> Vec<Name> {
        vec![Name::from("Lib.Zeta"), Name::from("Lib.Alpha")]
    }

    #[test]
    fn test_latex_index_keeps_member_order() {
        let config = RenderConfig::default();
        let latex =
            render_library_index(&config, &Name::from("Lib"), &members(), Format::Latex).unwrap();
        assert_eq!(
            latex,
            "\\input{module/Lib/Zeta.tex}\n\n\\input{module/Lib/Alpha.tex}\n"
        );
    }

    #[test]
    fn test_json_index_lists_paths() {
        let config = RenderConfig::default();
        let json =
            render_library_index(&config, &Name::from("Lib"), &members(), Format::Json).unwrap();
        let index: LibraryIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(index.name, Name::from("Lib"));
        assert_eq!(
            index.modules,
            vec!["module/Lib/Zeta.json", "module/Lib/Alpha.json"]
        );
    }

    #[test]
    fn test_empty_library() {
        let config = RenderConfig::default();
        let latex = render_library_index(&config, &Name::from("Lib"), &[], Format::Latex).unwrap();
        assert!(latex.is_empty());
    }
}
