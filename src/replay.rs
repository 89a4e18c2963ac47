//! Loading action lists and configuration from JSON.

use std::io::{self, Read};
use std::path::Path;

use crate::kernel::{Action, ExplorerConfig};

fn invalid_data(err: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// Parse a JSON array of `{ "name": ..., "value": ... }` objects.
pub fn parse_actions(data: &str) -> serde_json::Result<Vec<Action>> {
    serde_json::from_str(data)
}

pub fn read_actions(mut reader: impl Read) -> io::Result<Vec<Action>> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    parse_actions(&data).map_err(invalid_data)
}

pub fn load_actions(path: &Path) -> io::Result<Vec<Action>> {
    let data = std::fs::read_to_string(path)?;
    let actions = parse_actions(&data).map_err(invalid_data)?;
    tracing::debug!(path = %path.display(), count = actions.len(), "actions loaded");
    Ok(actions)
}

pub fn load_config(path: &Path) -> io::Result<ExplorerConfig> {
    let data = std::fs::read_to_string(path)?;
    ExplorerConfig::from_json(&data).map_err(invalid_data)
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;
