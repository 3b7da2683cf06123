//! Annotated text construction.

use crate::format::SpanStyle;
use crate::span::FormattingSpan;
use crate::text::annotated::{AnnotatedText, StyleRange};

/// Accumulates style ranges over fixed text.
#[derive(Debug, Clone)]
pub struct AnnotatedTextBuilder {
    text: String,
    styles: Vec<StyleRange>,
}

impl AnnotatedTextBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    /// Records `style` over `[start, end)` after every range added so far.
    pub fn add_style(mut self, style: impl Into<SpanStyle>, start: usize, end: usize) -> Self {
        self.push_style(style.into(), start, end);
        self
    }

    pub fn push_style(&mut self, style: SpanStyle, start: usize, end: usize) {
        self.styles.push(StyleRange { start, end, style });
    }

    pub fn build(self) -> AnnotatedText {
        AnnotatedText::from_parts(self.text, self.styles)
    }
}

/// Rebuilds styled text from raw text and a span list.
///
/// Spans are applied in list order and formats inside a span in
/// `FormattingAction` order. Marker spans and spans with `start >= end`
/// add nothing.
pub fn materialize(text: &str, spans: &[FormattingSpan]) -> AnnotatedText {
    let mut builder = AnnotatedTextBuilder::new(text);
    for span in spans.iter().filter(|span| span.start < span.end) {
        for action in &span.formats {
            builder.push_style(SpanStyle::Format(action), span.start, span.end);
        }
    }
    builder.build()
}
