//! Document rendering.
//!
//! This module provides:
//! - LaTeX rendering with registry-filtered cross-references
//! - JSON rendering that keeps every declared dependency
//! - Single-pass rendering of a module stream to both formats

mod json;
mod latex;

pub use json::{render_item_json, render_module_json, render_node_json};
pub use latex::LatexRenderer;

use serde_json::Value;

use crate::config::RenderConfig;
use crate::content::ModuleItem;
use crate::error::{Error, Result};
use crate::node::{Name, Registry};

/// Both renderings of one module stream.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedModule {
    pub latex: String,
    pub json: Value,
}

impl RenderedModule {
    /// Pretty-printed JSON document with a trailing newline.
    pub fn json_text(&self) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(&self.json)?))
    }
}

/// Render a module stream to LaTeX and JSON in a single walk.
pub fn render_module(
    registry: &Registry,
    config: &RenderConfig,
    module: &Name,
    items: &[ModuleItem],
) -> Result<RenderedModule> {
    let latex_renderer = LatexRenderer::new(registry, config);
    let wrap = |source: Error| Error::ModuleRender {
        module: module.clone(),
        source: Box::new(source),
    };

    let mut units = Vec::with_capacity(items.len());
    let mut objects = Vec::with_capacity(items.len());
    for item in items {
        units.push(latex_renderer.render_item(item).map_err(wrap)?);
        objects.push(render_item_json(item).map_err(wrap)?);
    }

    let latex = if units.is_empty() {
        String::new()
    } else {
        format!("{}\n", units.join("\n\n"))
    };
    tracing::debug!("rendered module {} ({} items)", module, items.len());
    Ok(RenderedModule {
        latex,
        json: Value::Array(objects),
    })
}
