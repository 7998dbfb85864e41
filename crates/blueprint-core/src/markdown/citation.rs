//! Best-effort citation resolution on raw docstring text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use rustc_hash::FxHashSet;

static CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]\s,]+(?:\s*,\s*[^\[\]\s,]+)*)\]").expect("citation pattern is valid")
});

/// Rewrites `[key]` into `\cite{key}` for keys of a known bibliography.
///
/// Brackets directly followed by `(` or `[` belong to links and are kept.
/// Tokens naming an unknown key stay as literal text.
#[derive(Debug, Clone, Default)]
pub struct CitationResolver {
    keys: FxHashSet<String>,
}

impl CitationResolver {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn resolve<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.keys.is_empty() {
            return Cow::Borrowed(text);
        }

        CITATION.replace_all(text, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let end = caps.get(0).map_or(0, |m| m.end());
            if matches!(text[end..].chars().next(), Some('(') | Some('[')) {
                return whole.to_string();
            }

            let keys: Vec<&str> = caps[1].split(',').map(str::trim).collect();
            if keys.iter().all(|key| self.keys.contains(*key)) {
                format!("\\cite{{{}}}", keys.join(","))
            } else {
                whole.to_string()
            }
        })
    }
}
