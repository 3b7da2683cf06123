//! Formatting action enum and the active-format set.
//!
//! # Invariants
//! - `FormattingAction` ordering is the fixed application order within a span.
//! - Heading levels are mutually exclusive inside a toggled `FormatSet`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed set of formatting kinds offered by the editor toolbar.
///
/// Variant names are the persisted tag strings; renaming a variant breaks
/// decoding of stored notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormattingAction {
    Heading,
    SubHeading,
    Bold,
    Italics,
    Underline,
    Strikethrough,
    Highlight,
}

impl FormattingAction {
    /// Every action in enumeration order.
    pub const ALL: [FormattingAction; 7] = [
        Self::Heading,
        Self::SubHeading,
        Self::Bold,
        Self::Italics,
        Self::Underline,
        Self::Strikethrough,
        Self::Highlight,
    ];

    /// Stable persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::SubHeading => "SubHeading",
            Self::Bold => "Bold",
            Self::Italics => "Italics",
            Self::Underline => "Underline",
            Self::Strikethrough => "Strikethrough",
            Self::Highlight => "Highlight",
        }
    }

    /// Returns whether this action sets a heading level.
    pub fn is_heading(self) -> bool {
        matches!(self, Self::Heading | Self::SubHeading)
    }
}

impl Display for FormattingAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag string names no known action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionError(pub String);

impl Display for ParseActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown formatting action `{}`", self.0)
    }
}

impl Error for ParseActionError {}

impl FromStr for FormattingAction {
    type Err = ParseActionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| ParseActionError(value.to_string()))
    }
}

/// Ordered set of formatting actions.
///
/// Iteration always follows `FormattingAction::ALL` order, which is what the
/// builder relies on for deterministic application inside one span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatSet(BTreeSet<FormattingAction>);

impl FormatSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, action: FormattingAction) -> bool {
        self.0.contains(&action)
    }

    /// Adds one action; returns `false` when it was already present.
    pub fn insert(&mut self, action: FormattingAction) -> bool {
        self.0.insert(action)
    }

    /// Removes one action; returns `false` when it was absent.
    pub fn remove(&mut self, action: FormattingAction) -> bool {
        self.0.remove(&action)
    }

    /// Applies a toolbar toggle.
    ///
    /// Active actions are switched off. Enabling a heading level first clears
    /// the other heading level so at most one is active.
    pub fn toggle(&mut self, action: FormattingAction) {
        if self.remove(action) {
            return;
        }
        if action.is_heading() {
            self.remove(FormattingAction::Heading);
            self.remove(FormattingAction::SubHeading);
        }
        self.insert(action);
    }

    pub fn iter(&self) -> impl Iterator<Item = FormattingAction> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<FormattingAction> for FormatSet {
    fn from_iter<I: IntoIterator<Item = FormattingAction>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[FormattingAction; N]> for FormatSet {
    fn from(value: [FormattingAction; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FormatSet {
    type Item = FormattingAction;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, FormattingAction>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{FormatSet, FormattingAction};

    #[test]
    fn names_round_trip_through_from_str() {
        for action in FormattingAction::ALL {
            assert_eq!(action.as_str().parse::<FormattingAction>(), Ok(action));
        }
        assert!("bold".parse::<FormattingAction>().is_err());
    }

    #[test]
    fn toggle_switches_active_action_off() {
        let mut set = FormatSet::from([FormattingAction::Bold]);
        set.toggle(FormattingAction::Bold);
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_keeps_heading_levels_exclusive() {
        let mut set = FormatSet::from([FormattingAction::Heading, FormattingAction::Italics]);
        set.toggle(FormattingAction::SubHeading);
        assert_eq!(
            set,
            FormatSet::from([FormattingAction::SubHeading, FormattingAction::Italics])
        );
    }

    #[test]
    fn iteration_follows_enumeration_order() {
        let set = FormatSet::from([
            FormattingAction::Highlight,
            FormattingAction::Bold,
            FormattingAction::Heading,
        ]);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![
                FormattingAction::Heading,
                FormattingAction::Bold,
                FormattingAction::Highlight
            ]
        );
    }
}
