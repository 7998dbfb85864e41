//! Dependency inference: turning node drafts into finished nodes.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::node::{DeclarationLocation, Name, Node, NodePart, Registry, dedup_names};

use super::constants::{ConstantGraph, DepKind};

/// Markup environment of a statement that has a proof.
pub const DEFAULT_THEOREM_ENV: &str = "theorem";
/// Markup environment of a proof-less statement.
pub const DEFAULT_DEFINITION_ENV: &str = "definition";
/// Markup environment of a proof.
pub const DEFAULT_PROOF_ENV: &str = "proof";

/// A node part before dependency inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartDraft {
    pub text: String,
    /// Dependencies declared explicitly by the author.
    pub uses: Vec<Name>,
    pub latex_env: Option<String>,
    /// Overrides the computed verification status.
    pub lean_ok: Option<bool>,
}

/// A node as handed over by the host layer, before inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDraft {
    pub name: Name,
    #[serde(default)]
    pub statement: PartDraft,
    /// Present when the node gets a separate proof part.
    #[serde(default)]
    pub proof: Option<PartDraft>,
    #[serde(default)]
    pub not_ready: bool,
    #[serde(default)]
    /// Issue number; zero is rejected when the manifest is read.
    pub discussion: Option<NonZeroU64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<DeclarationLocation>,
    #[serde(default)]
    pub file: Option<String>,
}

/// Infers dependencies and verification status of node drafts.
pub struct DependencyInference<'a> {
    constants: &'a ConstantGraph,
    registry: &'a Registry,
    marker: Name,
}

impl<'a> DependencyInference<'a> {
    pub fn new(constants: &'a ConstantGraph, registry: &'a Registry, marker: impl Into<Name>) -> Self {
        Self {
            constants,
            registry,
            marker: marker.into(),
        }
    }

    fn inferred(&self, name: &Name, kind: DepKind) -> Vec<Name> {
        let seeds = self.constants.direct_deps(name, kind);
        self.constants
            .collect_uses(&seeds, |dep| dep != name && self.registry.contains(dep), &self.marker)
    }

    fn sorry_free(&self, name: &Name, kind: DepKind) -> bool {
        if !self.constants.contains(name) {
            return false;
        }
        let seeds = self.constants.direct_deps(name, kind);
        !self.constants.reaches(&seeds, &self.marker)
    }

    /// Build the finished node for a draft.
    ///
    /// Inferred names are limited to registered nodes and the marker. Names
    /// declared by the author are kept as given; LaTeX output filters them.
    ///
    /// Without a proof, the statement absorbs the dependencies and status of
    /// both would-be parts. With a proof, names already used by the statement
    /// are removed from the proof, except for the marker.
    pub fn build_node(&self, draft: &NodeDraft) -> Node {
        let name = &draft.name;
        let statement_inferred = self.inferred(name, DepKind::Type);
        let proof_inferred = self.inferred(name, DepKind::Value);
        let statement_ok = self.sorry_free(name, DepKind::Type);
        let proof_ok = self.sorry_free(name, DepKind::Value);

        let (statement, proof) = match &draft.proof {
            Some(proof_draft) => {
                let statement_uses = dedup_names(
                    draft.statement.uses.iter().cloned().chain(statement_inferred),
                );
                let proof_uses: Vec<Name> =
                    dedup_names(proof_draft.uses.iter().cloned().chain(proof_inferred))
                        .into_iter()
                        .filter(|used| *used == self.marker || !statement_uses.contains(used))
                        .collect();

                let statement = NodePart {
                    lean_ok: draft.statement.lean_ok.unwrap_or(statement_ok),
                    text: draft.statement.text.clone(),
                    uses: statement_uses,
                    latex_env: env_or(&draft.statement.latex_env, DEFAULT_THEOREM_ENV),
                };
                let proof = NodePart {
                    lean_ok: proof_draft.lean_ok.unwrap_or(proof_ok),
                    text: proof_draft.text.clone(),
                    uses: proof_uses,
                    latex_env: env_or(&proof_draft.latex_env, DEFAULT_PROOF_ENV),
                };
                (statement, Some(proof))
            }
            None => {
                let uses = dedup_names(
                    draft
                        .statement
                        .uses
                        .iter()
                        .cloned()
                        .chain(statement_inferred)
                        .chain(proof_inferred),
                );
                let statement = NodePart {
                    lean_ok: draft.statement.lean_ok.unwrap_or(statement_ok && proof_ok),
                    text: draft.statement.text.clone(),
                    uses,
                    latex_env: env_or(&draft.statement.latex_env, DEFAULT_DEFINITION_ENV),
                };
                (statement, None)
            }
        };

        tracing::debug!(
            "inferred node {}: {} statement uses, proof: {}",
            name,
            statement.uses.len(),
            proof.is_some()
        );

        Node {
            name: name.clone(),
            statement,
            proof,
            not_ready: draft.not_ready,
            discussion: draft.discussion,
            title: draft.title.clone(),
            location: draft.location.clone(),
            file: draft.file.clone(),
        }
    }
}

fn env_or(env: &Option<String>, default: &str) -> String {
    env.clone().unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ConstantInfo;

    const MARKER: &str = "sorryAx";

    fn constant(name: &str, type_deps: &[&str], value_deps: &[&str]) -> ConstantInfo {
        ConstantInfo {
            name: Name::from(name),
            type_deps: type_deps.iter().map(|&d| Name::from(d)).collect(),
            value_deps: value_deps.iter().map(|&d| Name::from(d)).collect(),
        }
    }

    fn draft(name: &str, with_proof: bool) -> NodeDraft {
        NodeDraft {
            name: Name::from(name),
            statement: PartDraft::default(),
            proof: with_proof.then(PartDraft::default),
            not_ready: false,
            discussion: None,
            title: None,
            location: None,
            file: None,
        }
    }

    fn registry_with(names: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for &name in names {
            registry.register(Node::new(name, NodePart::new("definition", "")));
        }
        registry
    }

    fn names(list: &[&str]) -> Vec<Name> {
        list.iter().map(|&n| Name::from(n)).collect()
    }

    #[test]
    fn test_proofless_node_absorbs_both_parts() {
        let graph = ConstantGraph::from_constants(&[constant("double", &["nat"], &["add", "mul"])]);
        let registry = registry_with(&["nat", "add"]);
        let inference = DependencyInference::new(&graph, &registry, MARKER);

        let node = inference.build_node(&draft("double", false));
        assert!(node.proof.is_none());
        assert_eq!(node.statement.uses, names(&["nat", "add"]));
        assert_eq!(node.statement.latex_env, "definition");
        assert!(node.statement.lean_ok);
    }

    #[test]
    fn test_proof_parts_are_disjoint() {
        let graph = ConstantGraph::from_constants(&[constant(
            "zero_add",
            &["add", "zero"],
            &["add", "induction", MARKER],
        )]);
        let registry = registry_with(&["add", "zero", "induction"]);
        let inference = DependencyInference::new(&graph, &registry, MARKER);

        let mut input = draft("zero_add", true);
        input.statement.uses = names(&[MARKER]);
        let node = inference.build_node(&input);
        let proof = node.proof.as_ref().unwrap();

        assert_eq!(node.statement.uses, names(&[MARKER, "add", "zero"]));
        assert_eq!(proof.uses, names(&["induction", MARKER]));
        assert_eq!(node.statement.latex_env, "theorem");
        assert_eq!(proof.latex_env, "proof");
        assert!(node.statement.lean_ok);
        assert!(!proof.lean_ok);
    }

    #[test]
    fn test_unknown_declared_names_are_kept() {
        let graph = ConstantGraph::new();
        let registry = registry_with(&["add"]);
        let inference = DependencyInference::new(&graph, &registry, MARKER);

        let mut input = draft("thm", false);
        input.statement.uses = names(&["add", "missing", "add"]);
        let node = inference.build_node(&input);
        // resolved at render time, not here
        assert_eq!(node.statement.uses, names(&["add", "missing"]));
        // not a known constant, so it cannot be verified
        assert!(!node.statement.lean_ok);
    }

    #[test]
    fn test_lean_ok_override() {
        let graph = ConstantGraph::new();
        let registry = Registry::new();
        let inference = DependencyInference::new(&graph, &registry, MARKER);

        let mut input = draft("upstream", false);
        input.statement.lean_ok = Some(true);
        input.statement.latex_env = Some("lemma".to_string());
        let node = inference.build_node(&input);
        assert!(node.statement.lean_ok);
        assert_eq!(node.statement.latex_env, "lemma");
    }
}
