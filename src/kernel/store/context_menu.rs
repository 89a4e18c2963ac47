use crate::kernel::ActionKind;

impl super::Store {
    pub(super) fn reduce_context_menu_action(&mut self, kind: ActionKind) -> bool {
        let ui = &mut self.state.ui;
        let (flag, open) = match kind {
            ActionKind::ShowContextMenu => (&mut ui.is_file_explorer_context_menu_open, true),
            ActionKind::HideContextMenu => (&mut ui.is_file_explorer_context_menu_open, false),
            ActionKind::ShowFileContextMenu => (&mut ui.is_file_context_menu_open, true),
            ActionKind::HideFileContextMenu => (&mut ui.is_file_context_menu_open, false),
            ActionKind::ShowFolderContextMenu => (&mut ui.is_folder_context_menu_open, true),
            ActionKind::HideFolderContextMenu => (&mut ui.is_folder_context_menu_open, false),
            _ => return false,
        };

        let prev = std::mem::replace(flag, open);
        prev != open
    }
}
