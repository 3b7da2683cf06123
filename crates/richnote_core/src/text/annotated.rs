//! Annotated text value type.

use crate::format::{action_for, FormatSet, SpanStyle, StyleDescriptor};
use crate::span::FormattingSpan;
use crate::text::builder::AnnotatedTextBuilder;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One styled range, `[start, end)` in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub style: SpanStyle,
}

impl StyleRange {
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Raw text plus ordered style ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedText {
    text: String,
    styles: Vec<StyleRange>,
}

impl AnnotatedText {
    /// Creates unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    /// Creates a value from already ordered style ranges.
    pub fn from_parts(text: impl Into<String>, styles: Vec<StyleRange>) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }

    pub fn builder(text: impl Into<String>) -> AnnotatedTextBuilder {
        AnnotatedTextBuilder::new(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text length in chars; the unit of every offset.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Style ranges in application order.
    pub fn styles(&self) -> &[StyleRange] {
        &self.styles
    }

    /// Style ranges covering `index`, in application order.
    pub fn styles_at(&self, index: usize) -> impl Iterator<Item = &StyleRange> {
        self.styles.iter().filter(move |range| range.contains(index))
    }

    /// Effective style at `index` after composing every covering range.
    pub fn resolved_style_at(&self, index: usize) -> StyleDescriptor {
        self.styles_at(index)
            .fold(StyleDescriptor::DEFAULT, |acc, range| {
                acc.merge(&range.style.descriptor())
            })
    }

    /// Recovers the span list implied by the style ranges.
    ///
    /// Each range yields one span; ranges without a catalog action yield a
    /// span with no formats.
    pub fn extract_spans(&self) -> Vec<FormattingSpan> {
        self.styles
            .iter()
            .map(|range| FormattingSpan {
                start: range.start,
                end: range.end,
                formats: action_for(&range.style).into_iter().collect::<FormatSet>(),
            })
            .collect()
    }

    /// Whitespace-normalized preview limited to `max_chars`.
    pub fn plain_preview(&self, max_chars: usize) -> Option<String> {
        let normalized = WHITESPACE_RE.replace_all(&self.text, " ");
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.chars().take(max_chars).collect())
        }
    }
}
