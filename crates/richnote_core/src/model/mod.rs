//! Note domain model.
//!
//! # Responsibility
//! - Define the note record owned by the storage collaborator.
//! - Keep lock/password rules next to the data they guard.
//!
//! # Invariants
//! - The description is the annotated text value; its stored form comes
//!   from the codec.

pub mod note;
