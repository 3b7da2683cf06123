//! Stateful wrapper that tracks one note's editing session.

use crate::codec::{self, DecodeError};
use crate::editor::controller::{on_text_changed, Selection};
use crate::format::{FormatSet, FormattingAction};
use crate::span::FormattingSpan;
use crate::text::AnnotatedText;
use log::debug;

/// Current annotated text, active toolbar formats and last span list.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    annotated: AnnotatedText,
    active_formats: FormatSet,
    spans: Vec<FormattingSpan>,
}

impl EditSession {
    pub fn new(annotated: AnnotatedText) -> Self {
        let spans = annotated.extract_spans();
        Self {
            annotated,
            active_formats: FormatSet::new(),
            spans,
        }
    }

    /// Starts a session from a stored description.
    ///
    /// # Errors
    /// Returns the codec error unchanged when the payload is malformed.
    pub fn from_serialized(serialized: &str) -> Result<Self, DecodeError> {
        codec::decode(serialized).map(Self::new)
    }

    pub fn annotated(&self) -> &AnnotatedText {
        &self.annotated
    }

    pub fn spans(&self) -> &[FormattingSpan] {
        &self.spans
    }

    pub fn active_formats(&self) -> &FormatSet {
        &self.active_formats
    }

    /// Applies a toolbar toggle to the active formats.
    pub fn toggle_format(&mut self, action: FormattingAction) -> &FormatSet {
        self.active_formats.toggle(action);
        debug!(
            "event=format_toggle module=editor status=ok action={} active_count={}",
            action,
            self.active_formats.len()
        );
        &self.active_formats
    }

    /// Feeds one text-change event through the controller.
    pub fn on_text_changed(&mut self, new_text: &str, selection: Selection) -> &AnnotatedText {
        let previous_len = self.annotated.len();
        let change = on_text_changed(&self.annotated, new_text, selection, &self.active_formats);
        debug!(
            "event=text_change module=editor status=ok previous_len={} new_len={} spans={} styles={}",
            previous_len,
            change.annotated.len(),
            change.spans.len(),
            change.annotated.styles().len()
        );
        self.annotated = change.annotated;
        self.spans = change.spans;
        &self.annotated
    }

    /// Stored string form of the current value.
    pub fn serialize(&self) -> String {
        codec::encode(&self.annotated)
    }

    pub fn into_annotated(self) -> AnnotatedText {
        self.annotated
    }
}

#[cfg(test)]
mod tests {
    use super::EditSession;
    use crate::editor::Selection;
    use crate::format::{FormattingAction, SpanStyle};
    use crate::text::AnnotatedText;

    #[test]
    fn typing_with_bold_active_styles_the_selection() {
        let mut session = EditSession::new(AnnotatedText::plain(""));
        session.toggle_format(FormattingAction::Bold);
        session.on_text_changed("Hi", Selection::new(0, 2));

        assert_eq!(
            session.annotated().styles()[0].style,
            SpanStyle::Format(FormattingAction::Bold)
        );
        let restored = EditSession::from_serialized(&session.serialize()).unwrap();
        assert_eq!(restored.annotated(), session.annotated());
    }

    #[test]
    fn toggling_heading_levels_replaces_previous_level() {
        let mut session = EditSession::default();
        session.toggle_format(FormattingAction::Heading);
        let active = session.toggle_format(FormattingAction::SubHeading);
        assert!(active.contains(FormattingAction::SubHeading));
        assert!(!active.contains(FormattingAction::Heading));
    }
}
