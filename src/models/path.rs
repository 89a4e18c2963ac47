//! Path helpers for the virtual tree.
//!
//! Paths are `/`-separated strings. Empty segments are ignored, so `a//b/`
//! and `/a/b` name the same node. A leading `~` marks a root-absolute path;
//! anything else is relative to the present working directory.

pub const SEPARATOR: char = '/';
pub const ROOT_MARKER: &str = "~";

pub fn split_components(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|component| !component.is_empty())
        .collect()
}

/// Turn `path` into a root-absolute path, using `pwd` for relative input.
pub fn resolve(pwd: &str, path: &str) -> String {
    if let Some(rest) = path.strip_prefix(ROOT_MARKER) {
        return join_components(&split_components(rest));
    }

    let mut components = split_components(pwd);
    components.extend(split_components(path));
    join_components(&components)
}

/// Canonical form for a working directory. `~` and the empty string both mean root.
pub fn normalize_directory(path: &str) -> String {
    let path = path.trim();
    let path = path.strip_prefix(ROOT_MARKER).unwrap_or(path);
    join_components(&split_components(path))
}

pub fn join_components(components: &[&str]) -> String {
    let mut out = String::new();
    for component in components {
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        out.push_str(component);
    }
    out
}

pub fn base_name(path: &str) -> &str {
    split_components(path).pop().unwrap_or("")
}

/// Text after the final `.` of a name, or `""` when there is none.
pub fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

pub fn file_stem(name: &str) -> &str {
    name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
}

#[cfg(test)]
#[path = "../../tests/unit/models/path.rs"]
mod tests;
