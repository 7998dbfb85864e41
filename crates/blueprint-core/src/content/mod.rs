//! Content assembly.
//!
//! This module provides:
//! - The per-module entry model (nodes, includes, free text, docs)
//! - Append-only module stores with freezing
//! - Position-ordered assembly of a module's stream
//! - Library contents as module references

mod assemble;
mod store;
mod types;

pub use assemble::{assemble, library_contents};
pub use store::{ModuleContentStore, ModuleContents};
pub use types::{ContentEntry, EntryKind, ModuleDoc, ModuleItem};
