//! Formatting span lists and the edits applied to them per keystroke.
//!
//! # Responsibility
//! - Clip span lists after the text length changes.
//! - Append the span implied by the active selection and formats.
//!
//! # Invariants
//! - Every operation is pure and order-preserving.
//! - Existing spans are never merged or reordered.
//!
//! # Known deviation
//! Length changes are handled by clamping to the new total length only.
//! Offsets are not shifted around the edit position, so interior insertions
//! and deletions can leave spans over the wrong characters.

pub mod algebra;

pub use algebra::{adjust_for_new_length, append_active_span, FormattingSpan};
