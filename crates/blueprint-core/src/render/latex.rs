//! LaTeX rendering of nodes and module streams.

use crate::config::RenderConfig;
use crate::content::ModuleItem;
use crate::error::{Error, Result};
use crate::markdown::{CitationResolver, MarkdownConverter};
use crate::node::{Name, Node, NodePart, Registry};
use crate::paths::{Format, OutputKind, document_path};

/// Renders nodes and module content to LaTeX.
///
/// Dependency names are filtered against the registry on every call, so a
/// reference to an unknown node never reaches the output.
pub struct LatexRenderer<'a> {
    registry: &'a Registry,
    config: &'a RenderConfig,
    converter: MarkdownConverter,
}

impl<'a> LatexRenderer<'a> {
    pub fn new(registry: &'a Registry, config: &'a RenderConfig) -> Self {
        let mut converter = MarkdownConverter::new();
        if !config.bibliography.is_empty() {
            converter = converter.with_citations(CitationResolver::new(
                config.bibliography.iter().cloned(),
            ));
        }
        Self {
            registry,
            config,
            converter,
        }
    }

    /// Render a node: its statement environment, then its proof environment.
    pub fn render_node(&self, node: &Node) -> Result<String> {
        self.render_node_inner(node).map_err(|source| Error::NodeRender {
            node: node.name.clone(),
            source: Box::new(source),
        })
    }

    fn render_node_inner(&self, node: &Node) -> Result<String> {
        let preamble = self.preamble(node);
        let mut out = self.render_part(&node.statement, node.title.as_deref(), Some(&preamble))?;
        if let Some(proof) = &node.proof {
            out.push('\n');
            out.push_str(&self.render_part(proof, None, None)?);
        }
        tracing::debug!("rendered node {} to LaTeX", node.name);
        Ok(out)
    }

    fn render_part(
        &self,
        part: &NodePart,
        title: Option<&str>,
        preamble: Option<&str>,
    ) -> Result<String> {
        let env = &part.latex_env;
        let mut out = format!("\\begin{{{env}}}");
        if let Some(title) = title {
            out.push_str(&format!("[{title}]"));
        }
        if part.lean_ok {
            out.push_str("\\leanok{}");
        }
        let uses = self.registry.filter_known(&part.uses);
        if !uses.is_empty() {
            let joined: Vec<&str> = uses.iter().map(Name::as_str).collect();
            out.push_str(&format!("\\uses{{{}}}", joined.join(",")));
        }
        out.push_str(&self.converter.convert_joined(&part.text)?);
        if let Some(preamble) = preamble {
            out.push_str(preamble);
        }
        out.push_str(&format!("\n\\end{{{env}}}"));
        Ok(out)
    }

    /// Cross-reference tags and the source location comment of a node.
    fn preamble(&self, node: &Node) -> String {
        let mut out = format!("\\lean{{{0}}}\\label{{{0}}}", node.name);
        if node.not_ready {
            out.push_str("\\notready{}");
        }
        if let Some(discussion) = node.discussion {
            out.push_str(&format!("\\discussion{{{discussion}}}"));
        }

        let (file, span) = match &node.location {
            Some(location) => {
                let components: Vec<&str> = location.module.components().collect();
                let file = format!("{}.{}", components.join("/"), self.config.source_extension);
                let span = location.range.map(|range| range.to_string()).unwrap_or_default();
                (file, span)
            }
            None => (String::new(), String::new()),
        };
        out.push_str(&format!("\n% {file}:{span}"));
        out
    }

    /// Render one element of a module stream.
    pub fn render_item(&self, item: &ModuleItem) -> Result<String> {
        match item {
            ModuleItem::IncludeLibrary(name) => Ok(self.input(OutputKind::Library, name)),
            ModuleItem::IncludeModule(name) => Ok(self.input(OutputKind::Module, name)),
            ModuleItem::Node(node) => self.render_node(node),
            ModuleItem::FreeText(text) | ModuleItem::ModuleDoc(text) => Ok(text.clone()),
        }
    }

    /// `\input` directive referencing another rendered document.
    pub fn input(&self, kind: OutputKind, name: &Name) -> String {
        let path = document_path(
            &self.config.input_root,
            kind,
            name,
            Format::Latex.extension(),
        );
        format!("\\input{{{path}}}")
    }

    /// Render a whole module stream: units separated by blank lines, with a
    /// trailing newline. An empty stream renders to an empty string.
    pub fn render_module(&self, module: &Name, items: &[ModuleItem]) -> Result<String> {
        let mut units = Vec::with_capacity(items.len());
        for item in items {
            let unit = self.render_item(item).map_err(|source| Error::ModuleRender {
                module: module.clone(),
                source: Box::new(source),
            })?;
            units.push(unit);
        }

        if units.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}\n", units.join("\n\n")))
    }
}
