//! Stateless text-change pipeline.

use crate::format::FormatSet;
use crate::span::{adjust_for_new_length, append_active_span, FormattingSpan};
use crate::text::{materialize, AnnotatedText};

/// Caret or selection in chars. `start == end` is a caret.
///
/// `start` is where the selection was anchored, so `start > end` for a
/// selection made backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Returns `(low, high)` regardless of selection direction.
    pub fn ordered(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}

/// Output of one text change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// Rendered value for the new text.
    pub annotated: AnnotatedText,
    /// Span list the value was materialized from.
    pub spans: Vec<FormattingSpan>,
}

/// Computes the annotated text following a text change.
///
/// Steps: extract spans from `previous`, clamp them to the new length,
/// append the span for `selection` under `active_formats`, materialize.
pub fn on_text_changed(
    previous: &AnnotatedText,
    new_text: &str,
    selection: Selection,
    active_formats: &FormatSet,
) -> TextChange {
    let extracted = previous.extract_spans();
    let adjusted = adjust_for_new_length(&extracted, new_text.chars().count());
    let (start, end) = selection.ordered();
    let spans = append_active_span(adjusted, start, end, active_formats);
    let annotated = materialize(new_text, &spans);
    TextChange { annotated, spans }
}
