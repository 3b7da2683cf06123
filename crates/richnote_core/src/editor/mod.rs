//! Per-keystroke editing entry points.
//!
//! # Responsibility
//! - Turn a text-change event into the next annotated text and span list.
//! - Track toolbar toggles for one editing session.
//!
//! # Invariants
//! - `on_text_changed` is pure and needs no rendering surface.
//! - Callers keep selection offsets within `[0, len(new_text)]`.

pub mod controller;
pub mod session;

pub use controller::{on_text_changed, Selection, TextChange};
pub use session::EditSession;
