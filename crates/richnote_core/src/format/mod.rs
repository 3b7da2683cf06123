//! Formatting actions, style descriptors and the catalog binding them.
//!
//! # Responsibility
//! - Define the closed set of toolbar formatting actions.
//! - Map every action to exactly one visual style descriptor.
//! - Resolve styles back to actions without structural comparison.
//!
//! # Invariants
//! - The action -> descriptor mapping is total and injective.
//! - Persisted action names never change once shipped.

pub mod action;
pub mod catalog;
pub mod style;

pub use action::{FormatSet, FormattingAction, ParseActionError};
pub use catalog::{action_for, action_for_descriptor, label_for, style_for};
pub use style::{Color, FontStyle, FontWeight, SpanStyle, StyleDescriptor, TextDecoration};
