//! vexplorer - 虚拟文件浏览器状态核心
//!
//! 模块结构：
//! - models: 数据模型（FileTree, Node, 路径解析）
//! - kernel: 状态机（Action, Store, UiState）
//! - replay: 动作列表加载（JSON）

pub mod kernel;
pub mod models;
pub mod replay;

pub use kernel::{Action, ExplorerConfig, ExplorerError, ExplorerSnapshot, Store};
