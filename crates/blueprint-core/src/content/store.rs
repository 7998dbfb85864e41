//! Per-module content accumulators.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::node::{Name, Position};

use super::assemble::assemble;
use super::types::{ContentEntry, EntryKind, ModuleDoc, ModuleItem};

/// Content recorded for one module.
#[derive(Debug, Clone, Default)]
pub struct ModuleContents {
    pub entries: Vec<ContentEntry>,
    pub docs: Vec<ModuleDoc>,
    frozen: bool,
}

impl ModuleContents {
    /// Whether the module has finished processing.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

/// Append-only content for every module of a pipeline run.
///
/// Entries accumulate while a module is processed. Once frozen, a module is
/// only read, through [`ModuleContentStore::contents`].
#[derive(Debug, Clone, Default)]
pub struct ModuleContentStore {
    modules: FxHashMap<Name, ModuleContents>,
    /// Module names in first-seen order.
    order: Vec<Name>,
}

impl ModuleContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn open(&mut self, module: &Name) -> Result<&mut ModuleContents> {
        if !self.modules.contains_key(module) {
            self.order.push(module.clone());
        }
        let contents = self.modules.entry(module.clone()).or_default();
        if contents.frozen {
            return Err(Error::ModuleFrozen(module.clone()));
        }
        Ok(contents)
    }

    /// Record a module even if it ends up with no content.
    pub fn declare(&mut self, module: &Name) -> Result<()> {
        self.open(module).map(|_| ())
    }

    /// Append a content entry to a module.
    pub fn push_entry(&mut self, module: &Name, position: Position, kind: EntryKind) -> Result<()> {
        self.open(module)?
            .entries
            .push(ContentEntry::new(position, kind));
        Ok(())
    }

    /// Append a documentation block to a module.
    pub fn push_doc(&mut self, module: &Name, text: impl Into<String>, position: Position) -> Result<()> {
        self.open(module)?.docs.push(ModuleDoc::new(text, position));
        Ok(())
    }

    /// Mark a module as finished. Freezing twice is allowed.
    pub fn freeze(&mut self, module: &Name) -> Result<()> {
        let contents = self
            .modules
            .get_mut(module)
            .ok_or_else(|| Error::ModuleNotFound(module.clone()))?;
        contents.frozen = true;
        Ok(())
    }

    /// Read-only lookup of a module's content.
    pub fn contents(&self, module: &Name) -> Result<&ModuleContents> {
        self.modules
            .get(module)
            .ok_or_else(|| Error::ModuleNotFound(module.clone()))
    }

    /// The ordered content stream of a module.
    pub fn assemble(&self, module: &Name) -> Result<Vec<ModuleItem>> {
        let contents = self.contents(module)?;
        Ok(assemble(&contents.entries, &contents.docs))
    }

    /// Module names in the order they were first recorded.
    pub fn modules(&self) -> &[Name] {
        &self.order
    }
}
