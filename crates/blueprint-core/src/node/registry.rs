//! Name → node lookup used for cross-reference filtering.

use rustc_hash::FxHashMap;

use super::types::{Name, Node};

/// Nodes registered by a single upstream compilation unit.
#[derive(Debug, Clone)]
struct ImportedUnit {
    unit: Name,
    nodes: FxHashMap<Name, Node>,
}

/// Registry of all nodes known to a pipeline run.
///
/// Nodes of the current compilation unit live in the local map, where a later
/// registration of the same name replaces the earlier one. Nodes imported from
/// upstream units are kept per unit and never overwrite local entries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    local: FxHashMap<Name, Node>,
    imported: Vec<ImportedUnit>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node of the current unit, replacing any previous entry.
    pub fn register(&mut self, node: Node) {
        if self.local.contains_key(&node.name) {
            tracing::debug!("re-registering node {}", node.name);
        }
        self.local.insert(node.name.clone(), node);
    }

    /// Add the nodes of an upstream unit.
    ///
    /// Importing the same unit twice merges into the existing entry.
    pub fn import_unit(&mut self, unit: impl Into<Name>, nodes: impl IntoIterator<Item = Node>) {
        let unit = unit.into();
        let index = match self.imported.iter().position(|u| u.unit == unit) {
            Some(index) => index,
            None => {
                self.imported.push(ImportedUnit {
                    unit,
                    nodes: FxHashMap::default(),
                });
                self.imported.len() - 1
            }
        };
        let target = &mut self.imported[index].nodes;
        for node in nodes {
            target.insert(node.name.clone(), node);
        }
    }

    /// Look up a node, preferring the current unit over imports.
    pub fn lookup(&self, name: &Name) -> Option<&Node> {
        self.local.get(name).or_else(|| {
            self.imported
                .iter()
                .find_map(|unit| unit.nodes.get(name))
        })
    }

    /// Look up a node in one imported unit only.
    pub fn lookup_in(&self, unit: &Name, name: &Name) -> Option<&Node> {
        self.imported
            .iter()
            .find(|u| &u.unit == unit)
            .and_then(|u| u.nodes.get(name))
    }

    /// Whether `name` resolves to a node.
    pub fn contains(&self, name: &Name) -> bool {
        self.lookup(name).is_some()
    }

    /// The subsequence of `names` that resolve, in input order.
    pub fn filter_known<'a, I>(&self, names: I) -> Vec<Name>
    where
        I: IntoIterator<Item = &'a Name>,
    {
        names
            .into_iter()
            .filter(|name| self.contains(name))
            .cloned()
            .collect()
    }

    /// Number of nodes registered in the current unit.
    pub fn len(&self) -> usize {
        self.local.len()
    }

    /// Check if the current unit has no nodes.
    pub fn is_empty(&self) -> bool {
        self.local.is_empty()
    }

    /// Nodes of the current unit, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.local.values()
    }
}
