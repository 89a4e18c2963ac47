use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Missing or directory targets of `open_file` / `file_contents` are
    /// errors. When false they fall back to a no-op / empty string.
    pub strict: bool,
    /// Emit per-action and fallback diagnostics.
    pub verbose: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            strict: true,
            verbose: false,
        }
    }
}

impl ExplorerConfig {
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}
