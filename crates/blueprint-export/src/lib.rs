//! Output writer for blueprint documents.
//!
//! Persists rendered modules and library indexes under a base directory.
//!
//! # Architecture
//!
//! ```text
//! Session ──► assemble ──► render_module ──► OutputLayout ──► <base>/module/A/B.{tex,json}
//!                                                   │
//! library + members ──► render_library_index ───────┴────► <base>/library/L.{tex,json}
//! ```

mod error;
mod index;
mod layout;

pub use error::{ExportError, ExportResult};
pub use index::{LibraryIndex, render_library_index};
pub use layout::OutputLayout;

use std::path::PathBuf;

use blueprint_core::{Format, Name, OutputKind, RenderConfig, Session};

/// Render one module of the session and write it in the given format.
pub fn write_module(
    session: &Session,
    layout: &OutputLayout,
    module: &Name,
    format: Format,
) -> ExportResult<PathBuf> {
    let rendered = session.render_module(module)?;
    let content = match format {
        Format::Latex => rendered.latex,
        Format::Json => rendered.json_text()?,
    };
    layout.write(OutputKind::Module, module, &content, format)
}

/// Write the index of a library whose members are the given modules.
pub fn write_library_index(
    config: &RenderConfig,
    layout: &OutputLayout,
    library: &Name,
    members: &[Name],
    format: Format,
) -> ExportResult<PathBuf> {
    let content = render_library_index(config, library, members, format)?;
    layout.write(OutputKind::Library, library, &content, format)
}

/// Write every module of the session in both formats.
///
/// Returns the written paths in module order, LaTeX before JSON.
pub fn write_all(session: &Session, layout: &OutputLayout) -> ExportResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for module in session.store.modules() {
        let rendered = session.render_module(module)?;
        written.push(layout.write(OutputKind::Module, module, &rendered.latex, Format::Latex)?);
        written.push(layout.write(
            OutputKind::Module,
            module,
            &rendered.json_text()?,
            Format::Json,
        )?);
    }
    tracing::info!(
        "Exported {} modules to {}",
        session.store.modules().len(),
        layout.base_dir().display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{EntryKind, Node, NodePart, Position};
    use tempfile::TempDir;

    fn session() -> Session {
        let mut session = Session::default();
        let module = Name::from("A.B");
        let node = Node::new("add", NodePart::new("definition", "Addition.").with_lean_ok(true));
        session.registry.register(node.clone());
        session
            .store
            .push_entry(&module, Position::new(1, 0), EntryKind::Node(node))
            .unwrap();
        session.store.freeze(&module).unwrap();
        session
    }

    #[test]
    fn test_write_module_latex() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let layout = OutputLayout::new(temp.path());

        let path = write_module(&session(), &layout, &Name::from("A.B"), Format::Latex).unwrap();
        assert_eq!(path, temp.path().join("module/A/B.tex"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("\\begin{definition}\\leanok{}Addition.\\lean{add}"));
        assert!(content.ends_with("\\end{definition}\n"));
    }

    #[test]
    fn test_export_missing_module() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let layout = OutputLayout::new(temp.path());
        let err = write_module(&session(), &layout, &Name::from("Nope"), Format::Json).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Core(blueprint_core::Error::ModuleNotFound(_))
        ));
    }

    #[test]
    fn test_write_all_writes_both_formats() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let layout = OutputLayout::new(temp.path());
        let written = write_all(&session(), &layout).unwrap();
        assert_eq!(
            written,
            vec![
                temp.path().join("module/A/B.tex"),
                temp.path().join("module/A/B.json"),
            ]
        );
    }
}
