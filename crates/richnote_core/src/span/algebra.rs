//! Span list operations.

use crate::format::FormatSet;
use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` range of chars tagged with formatting actions.
///
/// A span with an empty `formats` set is a caret marker and renders as
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormattingSpan {
    pub start: usize,
    pub end: usize,
    pub formats: FormatSet,
}

impl FormattingSpan {
    pub fn new(start: usize, end: usize, formats: impl Into<FormatSet>) -> Self {
        Self {
            start,
            end,
            formats: formats.into(),
        }
    }

    /// Returns whether this span carries no formats.
    pub fn is_marker(&self) -> bool {
        self.formats.is_empty()
    }
}

/// Clamps every span to `new_len` and drops spans left empty.
///
/// Formats are carried through unchanged and input order is preserved.
pub fn adjust_for_new_length(spans: &[FormattingSpan], new_len: usize) -> Vec<FormattingSpan> {
    spans
        .iter()
        .filter_map(|span| {
            let start = span.start.min(new_len);
            let end = span.end.min(new_len);
            (start < end).then(|| FormattingSpan {
                start,
                end,
                formats: span.formats.clone(),
            })
        })
        .collect()
}

/// Appends the span implied by the current selection and active formats.
///
/// A backwards selection (`selection_start > selection_end`) is treated as
/// the same range read forwards.
///
/// - Non-empty selection with active formats: one span over the selection.
/// - No active formats and caret past 0: a marker over the char before the
///   caret.
/// - Otherwise nothing is appended.
///
/// Existing spans are kept as-is, so the output is never shorter than the
/// input.
pub fn append_active_span(
    mut spans: Vec<FormattingSpan>,
    selection_start: usize,
    selection_end: usize,
    active_formats: &FormatSet,
) -> Vec<FormattingSpan> {
    let (selection_start, selection_end) = if selection_start <= selection_end {
        (selection_start, selection_end)
    } else {
        (selection_end, selection_start)
    };
    if selection_start != selection_end && !active_formats.is_empty() {
        spans.push(FormattingSpan {
            start: selection_start,
            end: selection_end,
            formats: active_formats.clone(),
        });
    } else if active_formats.is_empty() && selection_start > 0 {
        spans.push(FormattingSpan {
            start: selection_start - 1,
            end: selection_start,
            formats: FormatSet::new(),
        });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::{adjust_for_new_length, append_active_span, FormattingSpan};
    use crate::format::{FormatSet, FormattingAction};

    fn bold(start: usize, end: usize) -> FormattingSpan {
        FormattingSpan::new(start, end, [FormattingAction::Bold])
    }

    #[test]
    fn adjust_keeps_spans_inside_new_length() {
        let spans = vec![bold(0, 2), bold(1, 3)];
        assert_eq!(adjust_for_new_length(&spans, 10), spans);
    }

    #[test]
    fn adjust_drops_spans_starting_at_or_past_new_length() {
        let spans = vec![bold(0, 2), bold(3, 5), bold(4, 6)];
        assert_eq!(adjust_for_new_length(&spans, 3), vec![bold(0, 2)]);
    }

    #[test]
    fn adjust_preserves_order_of_overlapping_spans() {
        let italics = FormattingSpan::new(0, 6, [FormattingAction::Italics]);
        let spans = vec![bold(2, 8), italics];
        assert_eq!(
            adjust_for_new_length(&spans, 5),
            vec![bold(2, 5), FormattingSpan::new(0, 5, [FormattingAction::Italics])]
        );
    }

    #[test]
    fn append_with_empty_selection_and_active_formats_adds_nothing() {
        let active = FormatSet::from([FormattingAction::Bold]);
        let spans = append_active_span(vec![bold(0, 1)], 3, 3, &active);
        assert_eq!(spans, vec![bold(0, 1)]);
    }

    #[test]
    fn append_with_selection_but_no_formats_adds_marker_at_selection_start() {
        let spans = append_active_span(Vec::new(), 2, 4, &FormatSet::new());
        assert_eq!(spans, vec![FormattingSpan::new(1, 2, FormatSet::new())]);
    }

    #[test]
    fn append_at_caret_zero_without_formats_adds_nothing() {
        let spans = append_active_span(Vec::new(), 0, 0, &FormatSet::new());
        assert!(spans.is_empty());
    }

    #[test]
    fn backwards_selection_appends_forward_span() {
        let active = FormatSet::from([FormattingAction::Bold]);
        let spans = append_active_span(Vec::new(), 4, 1, &active);
        assert_eq!(spans, vec![bold(1, 4)]);
    }

    #[test]
    fn backwards_selection_without_formats_marks_before_its_low_end() {
        let spans = append_active_span(Vec::new(), 4, 2, &FormatSet::new());
        assert_eq!(spans, vec![FormattingSpan::new(1, 2, FormatSet::new())]);
    }

    #[test]
    fn repeated_toggles_accumulate_duplicate_spans() {
        let active = FormatSet::from([FormattingAction::Underline]);
        let once = append_active_span(Vec::new(), 0, 2, &active);
        let twice = append_active_span(once, 0, 2, &active);
        assert_eq!(twice.len(), 2);
        assert_eq!(twice[0], twice[1]);
    }
}
