//! Error types for blueprint-core.

use thiserror::Error;

use crate::node::Name;

/// Result type for blueprint-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in blueprint-core.
#[derive(Debug, Error)]
pub enum Error {
    /// A markup construct the LaTeX backend cannot express.
    #[error("feature not supported: {feature}")]
    Unsupported { feature: &'static str },

    /// Rendering a single node failed.
    #[error("failed to render node {node}: {source}")]
    NodeRender {
        node: Name,
        #[source]
        source: Box<Error>,
    },

    /// Rendering a module document failed.
    #[error("failed to render module {module}: {source}")]
    ModuleRender {
        module: Name,
        #[source]
        source: Box<Error>,
    },

    /// No content has been recorded for the module.
    #[error("module not found: {0}")]
    ModuleNotFound(Name),

    /// The module has finished processing and no longer accepts entries.
    #[error("module {0} is frozen")]
    ModuleFrozen(Name),

    /// Node is not present in the registry.
    #[error("node not found: {0}")]
    NodeNotFound(Name),

    /// The manifest handed over by the host layer is inconsistent.
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error (or the error it wraps) is an unsupported-feature failure.
    pub fn is_unsupported(&self) -> bool {
        match self {
            Error::Unsupported { .. } => true,
            Error::NodeRender { source, .. } | Error::ModuleRender { source, .. } => {
                source.is_unsupported()
            }
            _ => false,
        }
    }

    /// Format the error with a recovery hint for command-line users.
    pub fn with_hint(&self) -> String {
        let hint = match self {
            Error::Unsupported { feature } => Some(format!(
                "remove the {feature} from the docstring or move it to a free-text block"
            )),
            Error::NodeRender { source, .. } | Error::ModuleRender { source, .. } => {
                return format!("{self}\n{}", source.hint_line());
            }
            Error::ModuleNotFound(_) => {
                Some("check that the module is listed in the manifest".to_string())
            }
            Error::NodeNotFound(_) => Some(
                "declare the node in `nodes` or `imports` before referencing it".to_string(),
            ),
            Error::ModuleFrozen(_) => None,
            Error::InvalidManifest(_) | Error::Json(_) => {
                Some("regenerate the manifest with the host toolchain".to_string())
            }
            Error::Io(_) => None,
        };
        match hint {
            Some(hint) => format!("{self}\n  hint: {hint}"),
            None => self.to_string(),
        }
    }

    fn hint_line(&self) -> String {
        let full = self.with_hint();
        full.lines()
            .find(|line| line.trim_start().starts_with("hint:"))
            .map(|line| line.to_string())
            .unwrap_or_default()
    }
}
