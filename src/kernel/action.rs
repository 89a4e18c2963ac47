use serde::{Deserialize, Serialize};

/// Optional namespace in front of action names. `file-explorer-create-file`
/// and `create-file` name the same action.
pub const ACTION_PREFIX: &str = "file-explorer-";

/// A named command with a string payload, as fed to [`super::Store::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Action {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> Option<ActionKind> {
        ActionKind::from_name(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    CreateFile,
    CreateFolder,
    DeleteFile,
    DeleteFolder,
    RenameFile,
    RenameFolder,
    MoveFile,
    MoveFolder,
    CopyFile,
    CopyFolder,
    ToggleFolder,
    ExpandFolder,
    CollapseFolder,
    SetFileContents,
    OpenFile,
    CloseFile,
    SetPresentWorkingDirectory,
    ShowContextMenu,
    HideContextMenu,
    ShowFileContextMenu,
    HideFileContextMenu,
    ShowFolderContextMenu,
    HideFolderContextMenu,
    ShowNewFileInput,
    HideNewFileInput,
    TypeNewFileInput,
    ClearNewFileInput,
    EnterNewFileInput,
    ShowNewFolderInput,
    HideNewFolderInput,
    TypeNewFolderInput,
    ClearNewFolderInput,
    EnterNewFolderInput,
    RenameFileDraftState,
    TypeRenameFileInput,
    EnterRenameFileInput,
    RenameFolderDraftState,
    TypeRenameFolderInput,
    EnterRenameFolderInput,
}

impl ActionKind {
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix(ACTION_PREFIX).unwrap_or(name);
        let kind = match name {
            "create-file" => Self::CreateFile,
            "create-folder" => Self::CreateFolder,
            "delete-file" => Self::DeleteFile,
            "delete-folder" => Self::DeleteFolder,
            "rename-file" => Self::RenameFile,
            "rename-folder" => Self::RenameFolder,
            "move-file" => Self::MoveFile,
            "move-folder" => Self::MoveFolder,
            "copy-file" => Self::CopyFile,
            "copy-folder" => Self::CopyFolder,
            "toggle-folder" => Self::ToggleFolder,
            "expand-folder" => Self::ExpandFolder,
            "collapse-folder" => Self::CollapseFolder,
            "set-file-contents" => Self::SetFileContents,
            "open-file" => Self::OpenFile,
            "close-file" => Self::CloseFile,
            "set-present-working-directory" => Self::SetPresentWorkingDirectory,
            "show-context-menu" => Self::ShowContextMenu,
            "hide-context-menu" => Self::HideContextMenu,
            "show-file-context-menu" => Self::ShowFileContextMenu,
            "hide-file-context-menu" => Self::HideFileContextMenu,
            "show-folder-context-menu" => Self::ShowFolderContextMenu,
            "hide-folder-context-menu" => Self::HideFolderContextMenu,
            "show-new-file-input" => Self::ShowNewFileInput,
            "hide-new-file-input" => Self::HideNewFileInput,
            "type-new-file-input" => Self::TypeNewFileInput,
            "clear-new-file-input" => Self::ClearNewFileInput,
            "enter-new-file-input" => Self::EnterNewFileInput,
            "show-new-folder-input" => Self::ShowNewFolderInput,
            "hide-new-folder-input" => Self::HideNewFolderInput,
            "type-new-folder-input" => Self::TypeNewFolderInput,
            "clear-new-folder-input" => Self::ClearNewFolderInput,
            "enter-new-folder-input" => Self::EnterNewFolderInput,
            "rename-file-draft-state" => Self::RenameFileDraftState,
            "type-rename-file-input" => Self::TypeRenameFileInput,
            "enter-rename-file-input" => Self::EnterRenameFileInput,
            "rename-folder-draft-state" => Self::RenameFolderDraftState,
            "type-rename-folder-input" => Self::TypeRenameFolderInput,
            "enter-rename-folder-input" => Self::EnterRenameFolderInput,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::CreateFile => "create-file",
            Self::CreateFolder => "create-folder",
            Self::DeleteFile => "delete-file",
            Self::DeleteFolder => "delete-folder",
            Self::RenameFile => "rename-file",
            Self::RenameFolder => "rename-folder",
            Self::MoveFile => "move-file",
            Self::MoveFolder => "move-folder",
            Self::CopyFile => "copy-file",
            Self::CopyFolder => "copy-folder",
            Self::ToggleFolder => "toggle-folder",
            Self::ExpandFolder => "expand-folder",
            Self::CollapseFolder => "collapse-folder",
            Self::SetFileContents => "set-file-contents",
            Self::OpenFile => "open-file",
            Self::CloseFile => "close-file",
            Self::SetPresentWorkingDirectory => "set-present-working-directory",
            Self::ShowContextMenu => "show-context-menu",
            Self::HideContextMenu => "hide-context-menu",
            Self::ShowFileContextMenu => "show-file-context-menu",
            Self::HideFileContextMenu => "hide-file-context-menu",
            Self::ShowFolderContextMenu => "show-folder-context-menu",
            Self::HideFolderContextMenu => "hide-folder-context-menu",
            Self::ShowNewFileInput => "show-new-file-input",
            Self::HideNewFileInput => "hide-new-file-input",
            Self::TypeNewFileInput => "type-new-file-input",
            Self::ClearNewFileInput => "clear-new-file-input",
            Self::EnterNewFileInput => "enter-new-file-input",
            Self::ShowNewFolderInput => "show-new-folder-input",
            Self::HideNewFolderInput => "hide-new-folder-input",
            Self::TypeNewFolderInput => "type-new-folder-input",
            Self::ClearNewFolderInput => "clear-new-folder-input",
            Self::EnterNewFolderInput => "enter-new-folder-input",
            Self::RenameFileDraftState => "rename-file-draft-state",
            Self::TypeRenameFileInput => "type-rename-file-input",
            Self::EnterRenameFileInput => "enter-rename-file-input",
            Self::RenameFolderDraftState => "rename-folder-draft-state",
            Self::TypeRenameFolderInput => "type-rename-folder-input",
            Self::EnterRenameFolderInput => "enter-rename-folder-input",
        }
    }

    /// Actions that touch the tree, the open-file set or the working directory.
    pub fn is_explorer_action(self) -> bool {
        matches!(
            self,
            Self::CreateFile
                | Self::CreateFolder
                | Self::DeleteFile
                | Self::DeleteFolder
                | Self::RenameFile
                | Self::RenameFolder
                | Self::MoveFile
                | Self::MoveFolder
                | Self::CopyFile
                | Self::CopyFolder
                | Self::ToggleFolder
                | Self::ExpandFolder
                | Self::CollapseFolder
                | Self::SetFileContents
                | Self::OpenFile
                | Self::CloseFile
                | Self::SetPresentWorkingDirectory
        )
    }

    pub fn is_context_menu_action(self) -> bool {
        matches!(
            self,
            Self::ShowContextMenu
                | Self::HideContextMenu
                | Self::ShowFileContextMenu
                | Self::HideFileContextMenu
                | Self::ShowFolderContextMenu
                | Self::HideFolderContextMenu
        )
    }

    pub fn is_input_action(self) -> bool {
        !self.is_explorer_action() && !self.is_context_menu_action()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/action.rs"]
mod tests;
