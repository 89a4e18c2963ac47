use crate::kernel::payload::{parse_contents, parse_transfer};
use crate::kernel::ActionKind;
use crate::models::{Node, NodeKind};

#[derive(Clone, Copy)]
enum Transfer {
    Rename,
    Move,
    Copy,
}

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, kind: ActionKind, value: &str) -> bool {
        match kind {
            ActionKind::CreateFile => {
                let path = self.resolve(value);
                let name = crate::models::path::base_name(&path).to_string();
                self.state.tree.insert(&path, Node::file(&name))
            }
            ActionKind::CreateFolder => {
                let path = self.resolve(value);
                self.state.tree.insert(&path, Node::empty_directory())
            }
            ActionKind::DeleteFile | ActionKind::DeleteFolder => {
                let path = self.resolve(value);
                self.state.tree.remove(&path).is_some()
            }
            ActionKind::RenameFile | ActionKind::RenameFolder => {
                self.transfer(kind, value, Transfer::Rename, None)
            }
            ActionKind::MoveFile => self.transfer(kind, value, Transfer::Move, None),
            ActionKind::MoveFolder => {
                self.transfer(kind, value, Transfer::Move, Some(NodeKind::Dir))
            }
            ActionKind::CopyFile => self.transfer(kind, value, Transfer::Copy, None),
            ActionKind::CopyFolder => {
                self.transfer(kind, value, Transfer::Copy, Some(NodeKind::Dir))
            }
            ActionKind::ToggleFolder => {
                let path = self.resolve(value);
                self.state
                    .tree
                    .update_directory(&path, |dir| dir.collapsed = !dir.collapsed)
            }
            ActionKind::ExpandFolder => self.set_collapsed(value, false),
            ActionKind::CollapseFolder => self.set_collapsed(value, true),
            ActionKind::SetFileContents => {
                let Some(payload) = parse_contents(value) else {
                    self.warn_malformed(kind, value);
                    return false;
                };
                let path = self.resolve(&payload.path);
                let updated = self.state.tree.set_file_contents(&path, payload.content);
                if !updated {
                    tracing::warn!(path = %payload.path, "set-file-contents target is not a file");
                }
                updated
            }
            ActionKind::OpenFile => match self.open_file(value) {
                Ok(changed) => changed,
                Err(err) => {
                    tracing::warn!(path = err.path(), error = %err, "open-file rejected");
                    false
                }
            },
            ActionKind::CloseFile => self.close_file(value),
            ActionKind::SetPresentWorkingDirectory => self.set_present_working_directory(value),
            _ => false,
        }
    }

    fn set_collapsed(&mut self, value: &str, collapsed: bool) -> bool {
        let path = self.resolve(value);
        let mut changed = false;
        let is_dir = self.state.tree.update_directory(&path, |dir| {
            changed = dir.collapsed != collapsed;
            dir.collapsed = collapsed;
        });
        is_dir && changed
    }

    fn transfer(
        &mut self,
        kind: ActionKind,
        value: &str,
        mode: Transfer,
        required: Option<NodeKind>,
    ) -> bool {
        let Some(payload) = parse_transfer(value) else {
            self.warn_malformed(kind, value);
            return false;
        };

        let from = self.resolve(&payload.from);
        let to = self.resolve(&payload.to);
        let applied = match mode {
            Transfer::Rename | Transfer::Move => self.state.tree.move_node(&from, &to, required),
            Transfer::Copy => self.state.tree.copy_node(&from, &to, required),
        };

        if applied && matches!(mode, Transfer::Rename) {
            self.state.relabel_open_file(&payload.from, &payload.to);
        }
        applied
    }
}
