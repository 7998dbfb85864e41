//! Pipeline session built from a host-toolchain manifest.
//!
//! The manifest is the JSON hand-off from the annotation layer:
//!
//! ```text
//! manifest.json ──► Manifest ──► DependencyInference ──► Registry
//!                       │                                    │
//!                       └──────► module entries ─────► ModuleContentStore
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::content::{EntryKind, ModuleContentStore, ModuleDoc, ModuleItem};
use crate::error::{Error, Result};
use crate::graph::{ConstantGraph, ConstantInfo, DependencyInference, NodeDraft};
use crate::node::{Name, Node, Position, Registry};
use crate::render::{RenderedModule, render_module};

/// Nodes of an upstream compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedUnit {
    pub unit: Name,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Kind of a manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryType {
    IncludeLibrary,
    IncludeModule,
    /// A node referenced by name, resolved through the registry.
    Node,
    FreeText,
}

/// A positioned manifest entry; `data` is a name or, for free text, the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub position: Position,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub data: String,
}

/// Content of one module as recorded by the host layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub name: Name,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
    #[serde(default)]
    pub docs: Vec<ModuleDoc>,
}

/// Everything the host layer hands over for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Manifest {
    pub config: RenderConfig,
    pub constants: Vec<ConstantInfo>,
    pub imports: Vec<ImportedUnit>,
    pub nodes: Vec<NodeDraft>,
    pub modules: Vec<ModuleRecord>,
}

impl Manifest {
    /// Read a manifest from a JSON file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Registry, module store and configuration of one pipeline run.
#[derive(Debug, Default)]
pub struct Session {
    pub config: RenderConfig,
    pub registry: Registry,
    pub store: ModuleContentStore,
}

impl Session {
    /// Create an empty session.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
            store: ModuleContentStore::new(),
        }
    }

    /// Load and build a session from a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let manifest = Manifest::read_from_file(path)?;
        tracing::info!("loaded manifest {}", path.display());
        Self::from_manifest(manifest)
    }

    /// Build the session: import upstream units, infer and register drafts in
    /// order, then record and freeze each module.
    pub fn from_manifest(manifest: Manifest) -> Result<Self> {
        let mut session = Self::new(manifest.config);

        for unit in manifest.imports {
            session.registry.import_unit(unit.unit, unit.nodes);
        }

        let constants = ConstantGraph::from_constants(&manifest.constants);
        for draft in &manifest.nodes {
            let node = DependencyInference::new(
                &constants,
                &session.registry,
                session.config.sorry_marker.as_str(),
            )
            .build_node(draft);
            session.registry.register(node);
        }

        for module in manifest.modules {
            session.add_module(module)?;
        }

        tracing::debug!(
            "session ready: {} nodes, {} modules",
            session.registry.len(),
            session.store.modules().len()
        );
        Ok(session)
    }

    fn add_module(&mut self, module: ModuleRecord) -> Result<()> {
        let name = module.name;
        if self.store.contents(&name).is_ok() {
            return Err(Error::InvalidManifest(format!(
                "module {name} is listed more than once"
            )));
        }
        self.store.declare(&name)?;

        for record in module.entries {
            let kind = match record.entry_type {
                EntryType::IncludeLibrary => EntryKind::IncludeLibrary(Name::from(record.data)),
                EntryType::IncludeModule => EntryKind::IncludeModule(Name::from(record.data)),
                EntryType::Node => {
                    let node = Name::from(record.data);
                    let resolved = self
                        .registry
                        .lookup(&node)
                        .cloned()
                        .ok_or(Error::NodeNotFound(node))?;
                    EntryKind::Node(resolved)
                }
                EntryType::FreeText => EntryKind::FreeText(record.data),
            };
            self.store.push_entry(&name, record.position, kind)?;
        }
        for doc in module.docs {
            self.store.push_doc(&name, doc.text, doc.position)?;
        }

        self.store.freeze(&name)
    }

    /// The ordered content stream of a module.
    pub fn module_items(&self, module: &Name) -> Result<Vec<ModuleItem>> {
        self.store.assemble(module)
    }

    /// Assemble and render a module in both formats.
    pub fn render_module(&self, module: &Name) -> Result<RenderedModule> {
        let items = self.module_items(module)?;
        render_module(&self.registry, &self.config, module, &items)
    }
}
