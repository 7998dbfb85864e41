//! Ordering of module content into a single stream.

use crate::node::{Name, Position};

use super::types::{ContentEntry, ModuleDoc, ModuleItem};

/// Merge content entries and module docs into one stream sorted by position.
///
/// The sort is stable: equal positions keep insertion order, with entries
/// ahead of docs. Nothing is dropped or deduplicated.
pub fn assemble(entries: &[ContentEntry], docs: &[ModuleDoc]) -> Vec<ModuleItem> {
    let mut positioned: Vec<(Position, ModuleItem)> = entries
        .iter()
        .map(|entry| (entry.position, ModuleItem::from(entry.kind.clone())))
        .chain(
            docs.iter()
                .map(|doc| (doc.position, ModuleItem::ModuleDoc(doc.text.clone()))),
        )
        .collect();

    positioned.sort_by_key(|(position, _)| *position);
    positioned.into_iter().map(|(_, item)| item).collect()
}

/// Content of a library: a reference to each member module, in the given order.
pub fn library_contents(modules: &[Name]) -> Vec<ModuleItem> {
    modules
        .iter()
        .map(|module| ModuleItem::IncludeModule(module.clone()))
        .collect()
}
