//! JSON rendering of nodes and module streams.
//!
//! Unlike LaTeX output, dependency lists are emitted unfiltered so that
//! downstream tooling can see dangling references.

use serde_json::{Value, json};

use crate::content::ModuleItem;
use crate::error::Result;
use crate::node::Node;

/// Structured form of a node: every field, plus its location and file.
pub fn render_node_json(node: &Node) -> Result<Value> {
    Ok(serde_json::to_value(node)?)
}

/// Tagged `{"type": ..., "data": ...}` object for one stream element.
pub fn render_item_json(item: &ModuleItem) -> Result<Value> {
    let data = match item {
        ModuleItem::IncludeLibrary(name) | ModuleItem::IncludeModule(name) => {
            Value::String(name.to_string())
        }
        ModuleItem::Node(node) => render_node_json(node)?,
        ModuleItem::FreeText(text) | ModuleItem::ModuleDoc(text) => Value::String(text.clone()),
    };
    Ok(json!({ "type": item.type_tag(), "data": data }))
}

/// Array of tagged objects in stream order.
pub fn render_module_json(items: &[ModuleItem]) -> Result<Value> {
    let rendered = items
        .iter()
        .map(render_item_json)
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(rendered))
}
