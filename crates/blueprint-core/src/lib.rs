//! Core engine for blueprint generation.
//!
//! This crate provides:
//! - The node model and the name → node registry
//! - Dependency inference over the host constant graph
//! - A restricted Markdown-to-LaTeX converter
//! - Position-ordered assembly of per-module content
//! - LaTeX and JSON rendering of module streams

pub mod config;
pub mod content;
pub mod error;
pub mod graph;
pub mod markdown;
pub mod node;
pub mod paths;
pub mod render;
pub mod session;

pub use config::RenderConfig;
pub use content::{
    ContentEntry, EntryKind, ModuleContentStore, ModuleDoc, ModuleItem, assemble,
    library_contents,
};
pub use error::{Error, Result};
pub use graph::{ConstantGraph, ConstantInfo, DependencyInference, NodeDraft, PartDraft};
pub use markdown::{CitationResolver, MarkdownConverter};
pub use node::{DeclarationLocation, DeclarationRange, Name, Node, NodePart, Position, Registry};
pub use paths::{Format, OutputKind};
pub use render::{LatexRenderer, RenderedModule, render_module, render_module_json, render_node_json};
pub use session::{Manifest, Session};
