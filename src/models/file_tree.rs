//! 文件树数据模型

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::path::{extension_of, split_components};

/// Children of one directory, keyed by name.
pub type FileStructure = BTreeMap<String, Node>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Dir,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaretPosition {
    pub row: u32,
    pub col: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLeaf {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub caret_position: CaretPosition,
}

impl FileLeaf {
    pub fn new(name: &str) -> Self {
        Self {
            content: String::new(),
            language: extension_of(name).to_string(),
            caret_position: CaretPosition::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub children: FileStructure,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(FileLeaf),
    Directory(DirectoryNode),
}

impl Node {
    pub fn file(name: &str) -> Self {
        Node::File(FileLeaf::new(name))
    }

    pub fn empty_directory() -> Self {
        Node::Directory(DirectoryNode::default())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Directory(_) => NodeKind::Dir,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind() == NodeKind::Dir
    }

    fn has_kind(&self, required: Option<NodeKind>) -> bool {
        required.map_or(true, |kind| self.kind() == kind)
    }
}

/// The virtual filesystem. The root directory itself is anonymous; only its
/// children are stored.
///
/// All paths taken by this type are already resolved against the working
/// directory (see [`super::path::resolve`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileTree {
    root: FileStructure,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_structure(root: FileStructure) -> Self {
        Self { root }
    }

    pub fn structure(&self) -> &FileStructure {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Find the mapping that should hold the last component of `path`.
    ///
    /// With `create_missing`, absent intermediate directories are created on
    /// the way down. Returns `None` for an empty path, or when an intermediate
    /// component is missing (without `create_missing`) or names a file.
    pub fn locate_parent(
        &mut self,
        path: &str,
        create_missing: bool,
    ) -> Option<(&mut FileStructure, String)> {
        let mut components = split_components(path);
        let name = components.pop()?.to_string();
        let mut current = &mut self.root;

        for component in components {
            let node = if create_missing {
                current
                    .entry(component.to_string())
                    .or_insert_with(Node::empty_directory)
            } else {
                current.get_mut(component)?
            };
            current = match node {
                Node::Directory(dir) => &mut dir.children,
                Node::File(_) => return None,
            };
        }

        Some((current, name))
    }

    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let components = split_components(path);
        let (last, parents) = components.split_last()?;
        let mut current = &self.root;

        for component in parents {
            current = match current.get(*component)? {
                Node::Directory(dir) => &dir.children,
                Node::File(_) => return None,
            };
        }

        current.get(*last)
    }

    pub fn lookup_mut(&mut self, path: &str) -> Option<&mut Node> {
        let (parent, name) = self.locate_parent(path, false)?;
        parent.get_mut(&name)
    }

    /// Children of the directory at `path`; the empty path is the root.
    pub fn directory(&self, path: &str) -> Option<&FileStructure> {
        if split_components(path).is_empty() {
            return Some(&self.root);
        }
        match self.lookup(path)? {
            Node::Directory(dir) => Some(&dir.children),
            Node::File(_) => None,
        }
    }

    /// True when `path` could receive a node: it has a final name and no
    /// existing intermediate component is a file.
    fn is_placeable(&self, path: &str) -> bool {
        let components = split_components(path);
        let Some((_, parents)) = components.split_last() else {
            return false;
        };

        let mut current = &self.root;
        for component in parents {
            match current.get(*component) {
                Some(Node::Directory(dir)) => current = &dir.children,
                Some(Node::File(_)) => return false,
                None => return true,
            }
        }
        true
    }

    /// Insert `node` at `path`, replacing whatever was there.
    pub fn insert(&mut self, path: &str, node: Node) -> bool {
        let Some((parent, name)) = self.locate_parent(path, true) else {
            return false;
        };
        parent.insert(name, node);
        true
    }

    pub fn remove(&mut self, path: &str) -> Option<Node> {
        let (parent, name) = self.locate_parent(path, false)?;
        parent.remove(&name)
    }

    /// Relocate the node at `from` to `to`. `required` restricts the kind of
    /// node that may be moved. A destination inside `from` itself is refused.
    pub fn move_node(&mut self, from: &str, to: &str, required: Option<NodeKind>) -> bool {
        if is_within(to, from) {
            return false;
        }
        if !self.lookup(from).is_some_and(|node| node.has_kind(required)) || !self.is_placeable(to)
        {
            return false;
        }

        match self.remove(from) {
            Some(node) => self.insert(to, node),
            None => false,
        }
    }

    /// Place a deep copy of the node at `from` under `to`.
    pub fn copy_node(&mut self, from: &str, to: &str, required: Option<NodeKind>) -> bool {
        let Some(node) = self
            .lookup(from)
            .filter(|node| node.has_kind(required))
            .cloned()
        else {
            return false;
        };

        self.is_placeable(to) && self.insert(to, node)
    }

    pub fn update_directory(&mut self, path: &str, f: impl FnOnce(&mut DirectoryNode)) -> bool {
        match self.lookup_mut(path) {
            Some(Node::Directory(dir)) => {
                f(dir);
                true
            }
            _ => false,
        }
    }

    pub fn set_file_contents(&mut self, path: &str, content: String) -> bool {
        match self.lookup_mut(path) {
            Some(Node::File(leaf)) => {
                leaf.content = content;
                true
            }
            _ => false,
        }
    }

    /// Indented listing of the visible tree. Collapsed directories are not
    /// descended into.
    pub fn tree_string(&self) -> String {
        build_tree_string(&self.root, 0, false)
    }

    pub fn full_tree_string(&self) -> String {
        build_tree_string(&self.root, 0, true)
    }

    /// Every file as `/a/b.ts`, sorted.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_file_paths(&self.root, "", &mut paths);
        paths.sort();
        paths
    }

    /// `ls`-style listing of one directory: child names sorted plainly,
    /// newline separated. Empty when `path` is not a directory.
    pub fn list_directory(&self, path: &str) -> String {
        self.directory(path)
            .map(|children| {
                children
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }
}

/// Order used by the tree view: case-insensitive first, exact text as the
/// tie-breaker.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn build_tree_string(
    structure: &FileStructure,
    indent_level: usize,
    include_collapsed: bool,
) -> String {
    let mut out = String::new();
    write_tree(&mut out, structure, indent_level, include_collapsed);
    out
}

fn write_tree(out: &mut String, structure: &FileStructure, depth: usize, include_collapsed: bool) {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for (name, node) in structure {
        match node {
            Node::Directory(dir) => dirs.push((name.as_str(), dir)),
            Node::File(_) => files.push(name.as_str()),
        }
    }

    dirs.sort_by(|a, b| compare_names(a.0, b.0));
    files.sort_by(|a, b| compare_names(a, b));

    for (name, dir) in dirs {
        push_line(out, depth, name);
        if include_collapsed || !dir.collapsed {
            write_tree(out, &dir.children, depth + 1, include_collapsed);
        }
    }
    for name in files {
        push_line(out, depth, name);
    }
}

fn push_line(out: &mut String, depth: usize, name: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(name);
    out.push('\n');
}

/// True when `path` is `ancestor` or lies below it.
fn is_within(path: &str, ancestor: &str) -> bool {
    split_components(path).starts_with(&split_components(ancestor))
}

fn collect_file_paths(structure: &FileStructure, prefix: &str, out: &mut Vec<String>) {
    for (name, node) in structure {
        let path = format!("{prefix}/{name}");
        match node {
            Node::File(_) => out.push(path),
            Node::Directory(dir) => collect_file_paths(&dir.children, &path, out),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;
