use super::Action;

/// Classifies actions whose value is a repeat count rather than a payload.
///
/// The action-name catalog is owned by the caller; the store only asks this
/// question and reports the parsed count back in `DispatchResult::repeat`.
pub trait ActionCatalog {
    fn is_repeatable(&self, action: &Action) -> bool;
}

/// Catalog with no repeatable actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRepeat;

impl ActionCatalog for NoRepeat {
    fn is_repeatable(&self, _action: &Action) -> bool {
        false
    }
}

impl<F> ActionCatalog for F
where
    F: Fn(&Action) -> bool,
{
    fn is_repeatable(&self, action: &Action) -> bool {
        self(action)
    }
}

/// Leading integer of the value, 1 when there is none.
pub fn repeat_count(action: &Action) -> usize {
    let value = action.value.trim();
    let digits = value
        .find(|ch: char| !ch.is_ascii_digit())
        .map_or(value, |end| &value[..end]);
    digits.parse().unwrap_or(1)
}
