//! Dependency graph between host-language constants.

use std::collections::VecDeque;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, EdgeRef};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::node::Name;

/// Which part of a constant an edge originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepKind {
    /// The constant's type (the statement).
    Type,
    /// The constant's value (the proof or body).
    Value,
}

/// A constant together with the constants its type and value mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantInfo {
    pub name: Name,
    #[serde(default)]
    pub type_deps: Vec<Name>,
    #[serde(default)]
    pub value_deps: Vec<Name>,
}

/// Directed graph of constants; edges go from user to used constant.
#[derive(Debug, Default)]
pub struct ConstantGraph {
    graph: DiGraph<Name, DepKind>,
    node_indices: FxHashMap<Name, NodeIndex>,
}

impl ConstantGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from constant descriptions.
    pub fn from_constants<'a>(constants: impl IntoIterator<Item = &'a ConstantInfo>) -> Self {
        let mut graph = Self::new();
        for constant in constants {
            graph.add_constant(constant);
        }
        graph
    }

    fn index_of(&mut self, name: &Name) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.clone());
        self.node_indices.insert(name.clone(), idx);
        idx
    }

    /// Add a constant and its edges. Referenced constants are created on demand.
    pub fn add_constant(&mut self, constant: &ConstantInfo) {
        let from = self.index_of(&constant.name);
        for (kind, deps) in [
            (DepKind::Type, &constant.type_deps),
            (DepKind::Value, &constant.value_deps),
        ] {
            for dep in deps {
                let to = self.index_of(dep);
                self.graph.add_edge(from, to, kind);
            }
        }
    }

    /// Whether the constant is part of the graph.
    pub fn contains(&self, name: &Name) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Number of constants in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Direct dependencies of `name` of the given kind, in insertion order.
    pub fn direct_deps(&self, name: &Name, kind: DepKind) -> Vec<Name> {
        let Some(&idx) = self.node_indices.get(name) else {
            return Vec::new();
        };
        // petgraph yields outgoing edges newest first
        let mut deps: Vec<Name> = self
            .graph
            .edges(idx)
            .filter(|edge| *edge.weight() == kind)
            .map(|edge| self.graph[edge.target()].clone())
            .collect();
        deps.reverse();
        deps
    }

    /// Whether `marker` can be reached from any of `seeds` through any edge.
    pub fn reaches(&self, seeds: &[Name], marker: &Name) -> bool {
        let Some(&target) = self.node_indices.get(marker) else {
            return false;
        };

        for seed in seeds {
            if seed == marker {
                return true;
            }
            let Some(&start) = self.node_indices.get(seed) else {
                continue;
            };
            let mut bfs = Bfs::new(&self.graph, start);
            while let Some(idx) = bfs.next(&self.graph) {
                if idx == target {
                    return true;
                }
            }
        }
        false
    }

    /// Collect the nodes first reached from `seeds`.
    ///
    /// The search records a constant and stops there when `is_node` accepts it
    /// or when it is the marker; every other constant is traversed through.
    /// Results keep discovery order.
    pub fn collect_uses(
        &self,
        seeds: &[Name],
        is_node: impl Fn(&Name) -> bool,
        marker: &Name,
    ) -> Vec<Name> {
        let mut found = Vec::new();
        let mut visited: FxHashSet<Name> = FxHashSet::default();
        let mut queue: VecDeque<Name> = seeds.iter().cloned().collect();

        while let Some(name) = queue.pop_front() {
            if !visited.insert(name.clone()) {
                continue;
            }
            if &name == marker || is_node(&name) {
                found.push(name);
                continue;
            }
            queue.extend(self.direct_deps(&name, DepKind::Type));
            queue.extend(self.direct_deps(&name, DepKind::Value));
        }

        found
    }
}
