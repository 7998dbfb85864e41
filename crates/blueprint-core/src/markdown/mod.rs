//! Markdown-to-LaTeX conversion.
//!
//! This module provides:
//! - Block and inline rendering of a restricted Markdown dialect
//! - Optional citation rewriting against a bibliography

mod citation;
mod convert;

pub use citation::CitationResolver;
pub use convert::MarkdownConverter;
