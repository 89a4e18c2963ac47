use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::models::path;
use crate::models::{FileStructure, FileTree};

use super::Action;

/// Menu visibility and in-progress text for the create/rename flows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiState {
    pub is_file_explorer_context_menu_open: bool,
    pub is_file_context_menu_open: bool,
    pub is_folder_context_menu_open: bool,
    pub is_new_file_input_visible: bool,
    pub is_new_folder_input_visible: bool,
    pub is_rename_file_input_visible: bool,
    pub is_rename_folder_input_visible: bool,
    pub new_file_input_value: String,
    pub new_folder_input_value: String,
    pub new_file_parent_path: String,
    pub new_folder_parent_path: String,
    pub original_file_being_renamed: String,
    pub rename_file_input_value: String,
    pub original_folder_being_renamed: String,
    pub rename_folder_input_value: String,
}

/// Everything needed to rebuild a store: UI record, tree, working directory
/// and open files. The action history is not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerSnapshot {
    #[serde(flatten)]
    pub ui: UiState,
    #[serde(default)]
    pub file_structure: FileStructure,
    #[serde(default)]
    pub present_working_directory: String,
    #[serde(default)]
    pub open_files: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    pub tree: FileTree,
    pub ui: UiState,
    open_files: FxHashSet<String>,
    actions_applied: Vec<Action>,
    present_working_directory: String,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: ExplorerSnapshot) -> Self {
        Self {
            tree: FileTree::from_structure(snapshot.file_structure),
            ui: snapshot.ui,
            open_files: snapshot.open_files.into_iter().collect(),
            actions_applied: Vec::new(),
            present_working_directory: path::normalize_directory(
                &snapshot.present_working_directory,
            ),
        }
    }

    pub fn snapshot(&self) -> ExplorerSnapshot {
        ExplorerSnapshot {
            ui: self.ui.clone(),
            file_structure: self.tree.structure().clone(),
            present_working_directory: self.present_working_directory.clone(),
            open_files: self.open_files(),
        }
    }

    pub fn present_working_directory(&self) -> &str {
        &self.present_working_directory
    }

    /// Returns true when the stored directory changed.
    pub fn set_present_working_directory(&mut self, dir: &str) -> bool {
        let dir = path::normalize_directory(dir);
        if dir == self.present_working_directory {
            return false;
        }
        self.present_working_directory = dir;
        true
    }

    pub fn resolve(&self, path: &str) -> String {
        path::resolve(&self.present_working_directory, path)
    }

    pub fn open_files(&self) -> Vec<String> {
        let mut files: Vec<String> = self.open_files.iter().cloned().collect();
        files.sort();
        files
    }

    pub(crate) fn mark_open(&mut self, path: &str) -> bool {
        self.open_files.insert(path.to_string())
    }

    pub(crate) fn mark_closed(&mut self, path: &str) -> bool {
        self.open_files.remove(path)
    }

    /// Move an open-file entry from `from` to `to`, if `from` was open.
    pub(crate) fn relabel_open_file(&mut self, from: &str, to: &str) -> bool {
        if !self.open_files.remove(from) {
            return false;
        }
        self.open_files.insert(to.to_string());
        true
    }

    pub fn actions_applied(&self) -> &[Action] {
        &self.actions_applied
    }

    pub(crate) fn push_action(&mut self, action: Action) {
        self.actions_applied.push(action);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
