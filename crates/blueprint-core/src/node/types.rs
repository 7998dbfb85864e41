//! Types for the node model.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Qualified identifier of a declaration (e.g. `Nat.add_comm`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Hierarchical separator used in qualified names.
    pub const SEPARATOR: char = '.';

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dot-separated segments of the name.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::SEPARATOR).filter(|c| !c.is_empty())
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A `(line, column)` source position; compares lexicographically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

/// Source range of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRange {
    pub pos: Position,
    pub end_pos: Position,
}

impl std::fmt::Display for DeclarationRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.pos, self.end_pos)
    }
}

/// Where a declaration lives: its module and (if known) its range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationLocation {
    pub module: Name,
    pub range: Option<DeclarationRange>,
}

/// One facet of a node: its statement or its proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePart {
    /// No incomplete-proof marker is transitively reachable from this part.
    #[serde(default)]
    pub lean_ok: bool,
    /// Markdown text.
    pub text: String,
    /// Dependency names, deduplicated and in first-seen order.
    #[serde(default)]
    pub uses: Vec<Name>,
    /// Environment wrapping the part (`theorem`, `definition`, `proof`, ...).
    pub latex_env: String,
}

impl NodePart {
    pub fn new(latex_env: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lean_ok: false,
            text: text.into(),
            uses: Vec::new(),
            latex_env: latex_env.into(),
        }
    }

    pub fn with_lean_ok(mut self, lean_ok: bool) -> Self {
        self.lean_ok = lean_ok;
        self
    }

    /// Replace the dependency list, dropping repeated names.
    pub fn with_uses<I, N>(mut self, uses: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        self.uses = dedup_names(uses.into_iter().map(Into::into));
        self
    }
}

/// A tagged declaration: a definition or theorem of the blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: Name,
    pub statement: NodePart,
    /// `None` for proof-less nodes, whose statement carries all dependencies.
    pub proof: Option<NodePart>,
    #[serde(default)]
    pub not_ready: bool,
    /// Issue number of the discussion thread.
    pub discussion: Option<NonZeroU64>,
    pub title: Option<String>,
    pub location: Option<DeclarationLocation>,
    /// Path of the source file as reported by the host toolchain.
    pub file: Option<String>,
}

impl Node {
    pub fn new(name: impl Into<Name>, statement: NodePart) -> Self {
        Self {
            name: name.into(),
            statement,
            proof: None,
            not_ready: false,
            discussion: None,
            title: None,
            location: None,
            file: None,
        }
    }

    pub fn with_proof(mut self, proof: NodePart) -> Self {
        self.proof = Some(proof);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_location(mut self, location: DeclarationLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Iterate over the statement and, if present, the proof.
    pub fn parts(&self) -> impl Iterator<Item = &NodePart> {
        std::iter::once(&self.statement).chain(self.proof.as_ref())
    }
}

/// Remove repeated names, keeping the first occurrence of each.
pub fn dedup_names(names: impl IntoIterator<Item = Name>) -> Vec<Name> {
    let mut seen = rustc_hash::FxHashSet::default();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_components() {
        let name = Name::from("Mathlib.Algebra.Group");
        let parts: Vec<_> = name.components().collect();
        assert_eq!(parts, vec!["Mathlib", "Algebra", "Group"]);
    }

    #[test]
    fn test_position_ordering_is_lexicographic() {
        assert!(Position::new(1, 5) < Position::new(2, 0));
        assert!(Position::new(1, 0) < Position::new(1, 5));
    }

    #[test]
    fn test_uses_are_deduplicated_in_order() {
        let part = NodePart::new("theorem", "").with_uses(["b", "a", "b", "c", "a"]);
        assert_eq!(part.uses, vec![Name::from("b"), Name::from("a"), Name::from("c")]);
    }

    #[test]
    fn test_range_display() {
        let range = DeclarationRange {
            pos: Position::new(3, 0),
            end_pos: Position::new(5, 12),
        };
        assert_eq!(range.to_string(), "3.0-5.12");
    }

    #[test]
    fn test_node_serializes_camel_case() {
        let node = Node::new("add", NodePart::new("definition", "Addition.").with_lean_ok(true));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["statement"]["leanOk"], true);
        assert_eq!(json["statement"]["latexEnv"], "definition");
        assert_eq!(json["notReady"], false);
        assert!(json["proof"].is_null());
    }
}
