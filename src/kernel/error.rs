use std::fmt;

/// Failures reported by direct queries (`open_file`, `file_contents`) when the
/// store runs in strict mode. Dispatched actions never return these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    FileNotFound(String),
    NotAFile(String),
    CannotOpenDirectory(String),
}

impl ExplorerError {
    pub fn path(&self) -> &str {
        match self {
            ExplorerError::FileNotFound(path)
            | ExplorerError::NotAFile(path)
            | ExplorerError::CannotOpenDirectory(path) => path,
        }
    }
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorerError::FileNotFound(path) => write!(f, "File not found: {path}"),
            ExplorerError::NotAFile(path) => {
                write!(f, "Path points to a directory, not a file: {path}")
            }
            ExplorerError::CannotOpenDirectory(path) => {
                write!(f, "Cannot open a directory: {path}")
            }
        }
    }
}

impl std::error::Error for ExplorerError {}
