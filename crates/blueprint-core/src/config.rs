//! Rendering configuration.

use serde::{Deserialize, Serialize};

/// Settings shared by every renderer of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Prefix of paths emitted in `\input{...}` directives.
    pub input_root: String,
    /// Extension of host-language source files, used in location comments.
    pub source_extension: String,
    /// Name of the constant marking an incomplete proof.
    pub sorry_marker: String,
    /// Citation keys of the bibliography; empty disables citation rewriting.
    pub bibliography: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input_root: String::new(),
            source_extension: "lean".to_string(),
            sorry_marker: "sorryAx".to_string(),
            bibliography: Vec::new(),
        }
    }
}
