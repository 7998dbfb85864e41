//! Node model and registry.
//!
//! A node is a tagged definition or theorem with a statement part, an
//! optional proof part and the names it depends on.

mod registry;
mod types;

pub use registry::Registry;
pub use types::{
    DeclarationLocation, DeclarationRange, Name, Node, NodePart, Position, dedup_names,
};
