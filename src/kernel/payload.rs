//! Parsers for composite action values.
//!
//! Transfers (rename/move/copy) use `from:<src>;to:<dst>`. File contents use
//! `<path>;<content>` where only the first `;` separates, so the content may
//! contain the delimiter itself. Content is free text and is kept verbatim.

pub const PAIR_DELIMITER: char = ';';

const FROM_LABEL: &str = "from:";
const TO_LABEL: &str = "to:";
const PATH_LABEL: &str = "path:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayload {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsPayload {
    pub path: String,
    pub content: String,
}

fn strip_label<'a>(part: &'a str, labels: &[&str]) -> &'a str {
    labels
        .iter()
        .find_map(|label| part.strip_prefix(label))
        .unwrap_or(part)
}

/// Exactly two `;`-separated parts, neither empty once its label is removed.
pub fn parse_transfer(value: &str) -> Option<TransferPayload> {
    let mut parts = value.split(PAIR_DELIMITER);
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let from = strip_label(from, &[FROM_LABEL, TO_LABEL]);
    let to = strip_label(to, &[FROM_LABEL, TO_LABEL]);
    if from.is_empty() || to.is_empty() {
        return None;
    }

    Some(TransferPayload {
        from: from.to_string(),
        to: to.to_string(),
    })
}

pub fn parse_contents(value: &str) -> Option<ContentsPayload> {
    let (path, content) = value.split_once(PAIR_DELIMITER)?;
    let path = strip_label(path, &[PATH_LABEL]);
    if path.is_empty() {
        return None;
    }

    Some(ContentsPayload {
        path: path.to_string(),
        content: content.to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/payload.rs"]
mod tests;
