//! Markdown → LaTeX conversion over the comrak AST.

use std::borrow::Cow;
use std::sync::LazyLock;

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{Arena, Options};
use regex::Regex;

use super::citation::CitationResolver;
use crate::error::{Error, Result};

/// Named and numeric character references.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
        .expect("entity pattern is valid")
});

/// Stands in for the `&` of an entity while comrak parses, so the entity is
/// not decoded.
const ENTITY_MARK: char = '\u{E000}';

/// Converts a restricted Markdown dialect into LaTeX blocks.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    citations: Option<CitationResolver>,
}

impl MarkdownConverter {
    /// Create a converter without citation resolution.
    pub fn new() -> Self {
        Self { citations: None }
    }

    /// Rewrite `[key]` tokens naming known bibliography entries before parsing.
    pub fn with_citations(mut self, citations: CitationResolver) -> Self {
        self.citations = Some(citations);
        self
    }

    /// Convert markdown into one LaTeX string per top-level block.
    ///
    /// HTML entities are kept as written. Text that yields no block at all is
    /// returned verbatim as a single block. Tables are rejected with
    /// [`Error::Unsupported`].
    pub fn convert(&self, markdown: &str) -> Result<Vec<String>> {
        let text = match &self.citations {
            Some(citations) => citations.resolve(markdown),
            None => Cow::Borrowed(markdown),
        };

        let mut options = Options::default();
        options.extension.strikethrough = true;
        options.extension.underline = true;
        options.extension.table = true;
        options.extension.math_dollars = true;
        options.extension.wikilinks_title_after_pipe = true;

        let shielded = ENTITY.replace_all(&text, format!("{ENTITY_MARK}${{1}};").as_str());
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, &shielded, &options);

        let mut blocks = Vec::new();
        for child in root.children() {
            blocks.push(render_block(child)?.replace(ENTITY_MARK, "&"));
        }

        if blocks.is_empty() && !text.trim().is_empty() {
            tracing::warn!("markdown produced no blocks, emitting raw text");
            blocks.push(text.into_owned());
        }

        Ok(blocks)
    }

    /// Convert markdown and join the blocks with blank lines.
    pub fn convert_joined(&self, markdown: &str) -> Result<String> {
        Ok(self.convert(markdown)?.join("\n\n"))
    }
}

fn render_block<'a>(node: &'a AstNode<'a>) -> Result<String> {
    let rendered = match &node.data.borrow().value {
        NodeValue::Paragraph => render_inlines(node),
        NodeValue::List(list) => {
            let env = match list.list_type {
                ListType::Bullet => "itemize",
                ListType::Ordered => "enumerate",
            };
            let mut items = Vec::new();
            for item in node.children() {
                items.push(format!("\\item {}", render_children(item)?));
            }
            format!("\\begin{{{env}}}\n{}\n\\end{{{env}}}", items.join("\n"))
        }
        NodeValue::Item(_) => format!("\\item {}", render_children(node)?),
        NodeValue::ThematicBreak => "\\hrule".to_string(),
        NodeValue::Heading(heading) => {
            let command = match heading.level {
                1 => "section",
                2 => "subsection",
                3 => "subsubsection",
                4 => "paragraph",
                _ => "subparagraph",
            };
            format!("\\{command}{{{}}}", render_inlines(node))
        }
        NodeValue::CodeBlock(code) => {
            // one blank line between source lines
            let lines: Vec<&str> = code.literal.trim_end_matches('\n').lines().collect();
            format!("\\begin{{verbatim}}\n{}\n\\end{{verbatim}}", lines.join("\n\n"))
        }
        NodeValue::HtmlBlock(html) => html.literal.trim_end_matches('\n').to_string(),
        NodeValue::BlockQuote => {
            format!("\\begin{{quote}}\n{}\n\\end{{quote}}", render_children(node)?)
        }
        NodeValue::Table(..) => return Err(Error::Unsupported { feature: "table" }),
        _ => render_inlines(node),
    };
    Ok(rendered)
}

/// Render nested blocks separated by blank lines.
fn render_children<'a>(node: &'a AstNode<'a>) -> Result<String> {
    let mut blocks = Vec::new();
    for child in node.children() {
        blocks.push(render_block(child)?);
    }
    Ok(blocks.join("\n\n"))
}

fn render_inlines<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    for child in node.children() {
        render_inline(child, &mut out);
    }
    out
}

fn render_inline<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push('\n'),
        NodeValue::HtmlInline(html) => out.push_str(html),
        NodeValue::Emph => wrap(out, "emph", &render_inlines(node)),
        NodeValue::Strong => wrap(out, "textbf", &render_inlines(node)),
        NodeValue::Underline => wrap(out, "uline", &render_inlines(node)),
        NodeValue::Strikethrough => wrap(out, "sout", &render_inlines(node)),
        NodeValue::Code(code) => wrap(out, "texttt", &code.literal),
        NodeValue::Link(link) => {
            out.push_str(&format!("\\href{{{}}}{{{}}}", link.url, render_inlines(node)));
        }
        NodeValue::WikiLink(link) => {
            out.push_str(&format!("\\href{{{}}}{{{}}}", link.url, render_inlines(node)));
        }
        NodeValue::Image(image) => wrap(out, "includegraphics", &image.url),
        NodeValue::Math(math) => {
            let delimiter = if math.display_math { "$$" } else { "$" };
            out.push_str(delimiter);
            out.push_str(&math.literal);
            out.push_str(delimiter);
        }
        _ => out.push_str(&render_inlines(node)),
    }
}

fn wrap(out: &mut String, command: &str, content: &str) {
    out.push('\\');
    out.push_str(command);
    out.push('{');
    out.push_str(content);
    out.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str) -> Vec<String> {
        MarkdownConverter::new().convert(text).unwrap()
    }

    #[test]
    fn test_paragraph_is_literal() {
        assert_eq!(convert("Natural number addition."), vec!["Natural number addition."]);
    }

    #[test]
    fn test_blocks_are_not_joined() {
        let blocks = convert("First.\n\nSecond.");
        assert_eq!(blocks, vec!["First.", "Second."]);
    }

    #[test]
    fn test_inline_markup() {
        let blocks = convert("*a* **b** ~~c~~ __d__ `e`");
        assert_eq!(
            blocks,
            vec!["\\emph{a} \\textbf{b} \\sout{c} \\uline{d} \\texttt{e}"]
        );
    }

    #[test]
    fn test_math_delimiters() {
        assert_eq!(convert("Let $x + 1$ be."), vec!["Let $x + 1$ be."]);
        assert_eq!(convert("$$\\sum_i a_i$$"), vec!["$$\\sum_i a_i$$"]);
    }

    #[test]
    fn test_headings_by_level() {
        let blocks = convert("# A\n\n## B\n\n### C\n\n#### D\n\n##### E\n\n###### F");
        assert_eq!(
            blocks,
            vec![
                "\\section{A}",
                "\\subsection{B}",
                "\\subsubsection{C}",
                "\\paragraph{D}",
                "\\subparagraph{E}",
                "\\subparagraph{F}",
            ]
        );
    }

    #[test]
    fn test_links_and_images() {
        assert_eq!(
            convert("[docs](https://example.com)"),
            vec!["\\href{https://example.com}{docs}"]
        );
        assert_eq!(convert("![alt](fig.png)"), vec!["\\includegraphics{fig.png}"]);
        assert_eq!(convert("[[Target|label]]"), vec!["\\href{Target}{label}"]);
    }

    #[test]
    fn test_nested_list() {
        let blocks = convert("- item1\n  - nested");
        assert_eq!(
            blocks,
            vec![
                "\\begin{itemize}\n\\item item1\n\n\\begin{itemize}\n\\item nested\n\\end{itemize}\n\\end{itemize}"
            ]
        );
    }

    #[test]
    fn test_ordered_list() {
        let blocks = convert("1. one\n2. two");
        assert_eq!(
            blocks,
            vec!["\\begin{enumerate}\n\\item one\n\\item two\n\\end{enumerate}"]
        );
    }

    #[test]
    fn test_code_block_and_quote() {
        assert_eq!(
            convert("```\nlet x := 1\nx\n```"),
            vec!["\\begin{verbatim}\nlet x := 1\n\nx\n\\end{verbatim}"]
        );
        assert_eq!(
            convert("> quoted\n>\n> again"),
            vec!["\\begin{quote}\nquoted\n\nagain\n\\end{quote}"]
        );
    }

    #[test]
    fn test_rule_and_html() {
        assert_eq!(convert("a\n\n---\n\nb"), vec!["a", "\\hrule", "b"]);
        assert_eq!(convert("<div>raw</div>"), vec!["<div>raw</div>"]);
    }

    #[test]
    fn test_table_is_unsupported() {
        let err = MarkdownConverter::new()
            .convert("| a | b |\n|---|---|\n| 1 | 2 |")
            .unwrap_err();
        assert!(matches!(err, Error::Unsupported { feature: "table" }));
    }

    #[test]
    fn test_entities_are_literal() {
        assert_eq!(convert("a &amp; b &copy;"), vec!["a &amp; b &copy;"]);
        assert_eq!(convert("&#35; and &#x41;"), vec!["&#35; and &#x41;"]);
        assert_eq!(convert("`&lt;T&gt;`"), vec!["\\texttt{&lt;T&gt;}"]);
        assert_eq!(convert("a & b"), vec!["a & b"]);
    }

    #[test]
    fn test_no_blocks_falls_back_to_raw_text() {
        // a lone link reference definition produces an empty document
        assert_eq!(convert("[a]: http://x"), vec!["[a]: http://x"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(convert("").is_empty());
        assert!(convert("   \n").is_empty());
    }
}
