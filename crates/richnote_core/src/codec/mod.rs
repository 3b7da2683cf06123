//! Persisted string form of annotated text.
//!
//! # Responsibility
//! - Encode annotated text to the stored JSON document.
//! - Decode stored documents, resolving tags through the format catalog.
//!
//! # Invariants
//! - `encode` is total; styles outside the catalog encode with a `null` tag.
//! - Absent or unknown tags decode to the default style with the range kept.
//! - Structurally malformed documents fail with `DecodeError`; they are
//!   never defaulted.
//!
//! # Wire format
//! `{"text": "...", "spans": [{"start": 0, "end": 5, "tag": "Bold"}]}`
//!
//! Field names and tag strings are a compatibility surface. The nested
//! `"style": {"tag": ...}` span layout written by earlier releases is still
//! accepted on decode.
//!
//! Round trips are lossy for custom styles by design: they come back as the
//! default style.

mod error;

pub use error::DecodeError;

use crate::format::{action_for, FormattingAction, SpanStyle};
use crate::text::{AnnotatedText, StyleRange};
use log::warn;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
struct AnnotatedTextData {
    text: String,
    spans: Vec<SpanData>,
}

#[derive(Debug, Deserialize)]
struct SpanData {
    start: usize,
    end: usize,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    style: Option<LegacyStyleData>,
}

#[derive(Debug, Deserialize)]
struct LegacyStyleData {
    #[serde(default)]
    tag: Option<String>,
}

impl SpanData {
    fn tag(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .or_else(|| self.style.as_ref().and_then(|style| style.tag.as_deref()))
    }
}

/// Serializes `value` to its stored string form.
pub fn encode(value: &AnnotatedText) -> String {
    let spans: Vec<Value> = value
        .styles()
        .iter()
        .map(|range| {
            let tag = action_for(&range.style).map(FormattingAction::as_str);
            json!({
                "start": range.start,
                "end": range.end,
                "tag": tag,
            })
        })
        .collect();

    json!({
        "text": value.text(),
        "spans": spans,
    })
    .to_string()
}

/// Parses a stored string back into annotated text.
///
/// # Errors
/// - `DecodeError::Malformed` when the document is not valid JSON, misses
///   `text` or `spans`, or has offsets that are not non-negative integers.
/// - `DecodeError::InvalidRange` when a span starts after it ends.
pub fn decode(serialized: &str) -> Result<AnnotatedText, DecodeError> {
    let data: AnnotatedTextData = serde_json::from_str(serialized)?;

    let mut styles = Vec::with_capacity(data.spans.len());
    for (index, span) in data.spans.iter().enumerate() {
        if span.start > span.end {
            return Err(DecodeError::InvalidRange {
                index,
                start: span.start,
                end: span.end,
            });
        }
        styles.push(StyleRange {
            start: span.start,
            end: span.end,
            style: resolve_tag(index, span.tag()),
        });
    }

    Ok(AnnotatedText::from_parts(data.text, styles))
}

fn resolve_tag(index: usize, tag: Option<&str>) -> SpanStyle {
    let Some(tag) = tag else {
        return SpanStyle::DEFAULT;
    };
    match tag.parse::<FormattingAction>() {
        Ok(action) => SpanStyle::Format(action),
        Err(_) => {
            warn!(
                "event=codec_decode module=codec status=degraded span_index={} reason=unknown_tag",
                index
            );
            SpanStyle::DEFAULT
        }
    }
}
