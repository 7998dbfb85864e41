//! Types for per-module content.

use serde::{Deserialize, Serialize};

use crate::node::{Name, Node, Position};

/// What a content entry contributes to its module document.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// Literal inclusion of a library index.
    IncludeLibrary(Name),
    /// Literal inclusion of another module's document.
    IncludeModule(Name),
    /// A node declared here or pulled in from elsewhere.
    Node(Node),
    /// Prose not attached to any declaration.
    FreeText(String),
}

/// One unit of per-module content, ordered by its position.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub position: Position,
    pub kind: EntryKind,
}

impl ContentEntry {
    pub fn new(position: Position, kind: EntryKind) -> Self {
        Self { position, kind }
    }
}

/// A free-standing module documentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDoc {
    pub text: String,
    pub position: Position,
}

impl ModuleDoc {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// An element of the assembled module stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleItem {
    IncludeLibrary(Name),
    IncludeModule(Name),
    Node(Node),
    FreeText(String),
    ModuleDoc(String),
}

impl ModuleItem {
    /// Tag of the item in JSON output. Free text and docs share `moduleDoc`.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ModuleItem::IncludeLibrary(_) => "includeLibrary",
            ModuleItem::IncludeModule(_) => "includeModule",
            ModuleItem::Node(_) => "node",
            ModuleItem::FreeText(_) | ModuleItem::ModuleDoc(_) => "moduleDoc",
        }
    }
}

impl From<EntryKind> for ModuleItem {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::IncludeLibrary(name) => ModuleItem::IncludeLibrary(name),
            EntryKind::IncludeModule(name) => ModuleItem::IncludeModule(name),
            EntryKind::Node(node) => ModuleItem::Node(node),
            EntryKind::FreeText(text) => ModuleItem::FreeText(text),
        }
    }
}
