//! Style-annotated text values and their materialization from span lists.
//!
//! # Responsibility
//! - Hold raw text plus ordered, possibly overlapping style ranges.
//! - Rebuild annotated text from a span list deterministically.
//!
//! # Invariants
//! - Style ranges keep application order; later ranges win only for the
//!   attributes they set.
//! - Marker spans never produce a style range.

pub mod annotated;
pub mod builder;

pub use annotated::{AnnotatedText, StyleRange};
pub use builder::{materialize, AnnotatedTextBuilder};
