//! Storage collaborator for notes.
//!
//! # Responsibility
//! - Define the note persistence contract used by the service layer.
//! - Keep SQL and the description codec call inside the storage boundary.
//!
//! # Invariants
//! - Writes validate the note before touching SQL.
//! - Reads surface corrupt descriptions as errors instead of defaulting.
//! - Concurrent updates to one note resolve last-write-wins.

pub mod note_repo;
