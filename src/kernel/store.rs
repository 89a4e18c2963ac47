use std::fmt;

use crate::models::{FileStructure, Node, NodeKind};

use super::catalog::{repeat_count, ActionCatalog, NoRepeat};
use super::{
    Action, ActionKind, ExplorerConfig, ExplorerError, ExplorerSnapshot, ExplorerState, UiState,
};

mod context_menu;
mod explorer;
mod input_dialog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
    /// Repeat count parsed from the value of a repeatable action, 1 otherwise.
    pub repeat: usize,
}

pub struct Store {
    state: ExplorerState,
    config: ExplorerConfig,
    catalog: Box<dyn ActionCatalog + Send>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .field("present_working_directory", &self.state.present_working_directory())
            .field("actions_applied", &self.state.actions_applied().len())
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ExplorerConfig::default())
    }
}

impl Store {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            state: ExplorerState::new(),
            config,
            catalog: Box::new(NoRepeat),
        }
    }

    /// Build a store by replaying `actions` in order.
    pub fn with_actions(actions: impl IntoIterator<Item = Action>, config: ExplorerConfig) -> Self {
        let mut store = Self::new(config);
        store.dispatch_all(actions);
        store
    }

    pub fn from_snapshot(snapshot: ExplorerSnapshot, config: ExplorerConfig) -> Self {
        Self {
            state: ExplorerState::from_snapshot(snapshot),
            config,
            catalog: Box::new(NoRepeat),
        }
    }

    pub fn with_catalog(mut self, catalog: impl ActionCatalog + Send + 'static) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let repeat = if self.catalog.is_repeatable(&action) {
            repeat_count(&action)
        } else {
            1
        };

        let state_changed = match action.kind() {
            Some(kind) if kind.is_explorer_action() => {
                self.reduce_explorer_action(kind, &action.value)
            }
            Some(kind) if kind.is_context_menu_action() => self.reduce_context_menu_action(kind),
            Some(kind) => self.reduce_input_dialog_action(kind, &action.value),
            None => {
                tracing::debug!(name = %action.name, "ignoring unrecognized action");
                false
            }
        };

        if self.config.verbose {
            tracing::debug!(
                name = %action.name,
                value = %action.value,
                state_changed,
                "action applied"
            );
        }

        self.state.push_action(action);
        DispatchResult {
            state_changed,
            repeat,
        }
    }

    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<DispatchResult> {
        actions
            .into_iter()
            .map(|action| self.dispatch(action))
            .collect()
    }

    pub fn resolve(&self, path: &str) -> String {
        self.state.resolve(path)
    }

    /// Mark `path` open. The exact string is stored, so later lookups and
    /// renames must use the same spelling.
    ///
    /// Returns whether the set changed. In lenient mode a missing or
    /// directory target is a no-op instead of an error.
    pub fn open_file(&mut self, path: &str) -> Result<bool, ExplorerError> {
        let kind = self.state.tree.lookup(&self.resolve(path)).map(Node::kind);
        let err = match kind {
            Some(NodeKind::File) => return Ok(self.state.mark_open(path)),
            Some(NodeKind::Dir) => ExplorerError::CannotOpenDirectory(path.to_string()),
            None => ExplorerError::FileNotFound(path.to_string()),
        };

        if self.config.strict {
            return Err(err);
        }
        if self.config.verbose {
            tracing::warn!(error = %err, "open ignored");
        }
        Ok(false)
    }

    pub fn close_file(&mut self, path: &str) -> bool {
        self.state.mark_closed(path)
    }

    pub fn file_contents(&self, path: &str) -> Result<&str, ExplorerError> {
        let err = match self.state.tree.lookup(&self.resolve(path)) {
            Some(Node::File(leaf)) => return Ok(&leaf.content),
            Some(Node::Directory(_)) => ExplorerError::NotAFile(path.to_string()),
            None => ExplorerError::FileNotFound(path.to_string()),
        };

        if self.config.strict {
            return Err(err);
        }
        if self.config.verbose {
            tracing::warn!(error = %err, "no contents, returning empty string");
        }
        Ok("")
    }

    pub fn set_present_working_directory(&mut self, dir: &str) -> bool {
        self.state.set_present_working_directory(dir)
    }

    pub fn present_working_directory(&self) -> &str {
        self.state.present_working_directory()
    }

    pub fn file_tree(&self) -> String {
        self.state.tree.tree_string()
    }

    /// Like [`Store::file_tree`] but descends into collapsed directories.
    pub fn full_file_tree(&self) -> String {
        self.state.tree.full_tree_string()
    }

    pub fn file_structure(&self) -> &FileStructure {
        self.state.tree.structure()
    }

    pub fn file_paths(&self) -> Vec<String> {
        self.state.tree.file_paths()
    }

    pub fn ls(&self, path: &str) -> String {
        self.state.tree.list_directory(&self.resolve(path))
    }

    pub fn actions_applied(&self) -> &[Action] {
        self.state.actions_applied()
    }

    pub fn open_files(&self) -> Vec<String> {
        self.state.open_files()
    }

    pub fn ui(&self) -> &UiState {
        &self.state.ui
    }

    pub fn snapshot(&self) -> ExplorerSnapshot {
        self.state.snapshot()
    }

    fn warn_malformed(&self, kind: ActionKind, value: &str) {
        tracing::warn!(action = kind.name(), value, "malformed action value");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
