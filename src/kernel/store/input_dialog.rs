use crate::kernel::{ActionKind, UiState};
use crate::models::path::{base_name, extension_of, file_stem};

fn set_text(field: &mut String, value: String) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}

fn set_flag(flag: &mut bool, value: bool) -> bool {
    std::mem::replace(flag, value) != value
}

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, kind: ActionKind, value: &str) -> bool {
        let ui = &mut self.state.ui;
        match kind {
            ActionKind::ShowNewFileInput => {
                let mut changed = set_flag(&mut ui.is_new_file_input_visible, true);
                if !value.is_empty() {
                    changed |= set_text(&mut ui.new_file_parent_path, value.to_string());
                }
                changed
            }
            ActionKind::HideNewFileInput => set_flag(&mut ui.is_new_file_input_visible, false),
            ActionKind::TypeNewFileInput => {
                ui.new_file_input_value.push_str(value);
                !value.is_empty()
            }
            ActionKind::ClearNewFileInput => {
                let changed = set_text(&mut ui.new_file_input_value, String::new());
                clear_parent_paths(ui) || changed
            }
            ActionKind::EnterNewFileInput => {
                let before = ui.clone();
                ui.is_new_file_input_visible = false;
                ui.new_file_input_value.clear();
                ui.new_file_parent_path.clear();
                *ui != before
            }
            ActionKind::ShowNewFolderInput => {
                let mut changed = set_flag(&mut ui.is_new_folder_input_visible, true);
                if !value.is_empty() {
                    changed |= set_text(&mut ui.new_folder_parent_path, value.to_string());
                }
                changed
            }
            ActionKind::HideNewFolderInput => set_flag(&mut ui.is_new_folder_input_visible, false),
            ActionKind::TypeNewFolderInput => {
                ui.new_folder_input_value.push_str(value);
                !value.is_empty()
            }
            ActionKind::ClearNewFolderInput => {
                let changed = set_text(&mut ui.new_folder_input_value, String::new());
                clear_parent_paths(ui) || changed
            }
            ActionKind::EnterNewFolderInput => {
                let before = ui.clone();
                ui.is_new_folder_input_visible = false;
                ui.new_folder_input_value.clear();
                ui.new_folder_parent_path.clear();
                *ui != before
            }
            ActionKind::RenameFileDraftState => {
                let before = ui.clone();
                ui.original_file_being_renamed = value.to_string();
                ui.rename_file_input_value = file_stem(base_name(value)).to_string();
                ui.is_rename_file_input_visible = true;
                *ui != before
            }
            ActionKind::TypeRenameFileInput => {
                // The extension comes from the draft's original path.
                let ext = extension_of(base_name(&ui.original_file_being_renamed));
                let next = if ext.is_empty() {
                    value.to_string()
                } else {
                    format!("{value}.{ext}")
                };
                set_text(&mut ui.rename_file_input_value, next)
            }
            ActionKind::EnterRenameFileInput => {
                let before = ui.clone();
                ui.is_rename_file_input_visible = false;
                ui.original_file_being_renamed.clear();
                ui.rename_file_input_value.clear();
                *ui != before
            }
            ActionKind::RenameFolderDraftState => {
                let before = ui.clone();
                ui.original_folder_being_renamed = value.to_string();
                ui.rename_folder_input_value = base_name(value).to_string();
                ui.is_rename_folder_input_visible = true;
                *ui != before
            }
            ActionKind::TypeRenameFolderInput => {
                set_text(&mut ui.rename_folder_input_value, value.to_string())
            }
            ActionKind::EnterRenameFolderInput => {
                let before = ui.clone();
                ui.is_rename_folder_input_visible = false;
                ui.original_folder_being_renamed.clear();
                ui.rename_folder_input_value.clear();
                *ui != before
            }
            _ => false,
        }
    }
}

/// Both new-item parent trackers are reset together.
fn clear_parent_paths(ui: &mut UiState) -> bool {
    let file = set_text(&mut ui.new_file_parent_path, String::new());
    let folder = set_text(&mut ui.new_folder_parent_path, String::new());
    file || folder
}
