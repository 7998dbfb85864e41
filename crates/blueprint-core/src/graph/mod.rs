//! Constant graph and dependency inference.
//!
//! This module provides:
//! - The dependency graph between host-language constants
//! - Reachability of the incomplete-proof marker
//! - Inference of node dependencies from drafts

mod constants;
mod inference;

pub use constants::{ConstantGraph, ConstantInfo, DepKind};
pub use inference::{
    DEFAULT_DEFINITION_ENV, DEFAULT_PROOF_ENV, DEFAULT_THEOREM_ENV, DependencyInference,
    NodeDraft, PartDraft,
};
