//! 数据模型层

pub mod file_tree;
pub mod path;

pub use file_tree::{
    build_tree_string, CaretPosition, DirectoryNode, FileLeaf, FileStructure, FileTree, Node,
    NodeKind,
};
