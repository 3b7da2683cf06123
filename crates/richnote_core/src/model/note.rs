//! Note domain model.
//!
//! # Responsibility
//! - Define the note record persisted by the storage collaborator.
//! - Own password lock/unlock rules for protected notes.
//!
//! # Invariants
//! - `encrypt == true` iff `password_hash` is set.
//! - Plain-text passwords are never stored; only SHA-256 hex digests.
//! - `modified_at` is not earlier than `created_at` for saved notes.

use crate::text::AnnotatedText;
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Row identifier assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(pub i64);

impl NoteId {
    /// Identifier of a note that has not been inserted yet.
    pub const UNSAVED: NoteId = NoteId(0);

    pub fn is_saved(self) -> bool {
        self.0 > 0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for note mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Lock was requested with a blank password.
    EmptyPassword,
    /// Lock flag and stored digest disagree.
    InconsistentLock,
    /// `modified_at` is earlier than `created_at`.
    InvalidTimestamps { created_at: i64, modified_at: i64 },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::InconsistentLock => {
                write!(f, "encrypt flag and password hash must be set together")
            }
            Self::InvalidTimestamps {
                created_at,
                modified_at,
            } => write!(
                f,
                "modified_at ({modified_at}) must be >= created_at ({created_at})"
            ),
        }
    }
}

impl Error for NoteValidationError {}

/// One note with a rich-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub description: AnnotatedText,
    pub encrypt: bool,
    /// SHA-256 hex digest of the lock password.
    pub password_hash: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub modified_at: i64,
}

impl Note {
    /// Creates an unsaved note stamped with the current time.
    pub fn draft(title: impl Into<String>, description: AnnotatedText) -> Self {
        let now = now_epoch_ms();
        Self {
            id: NoteId::UNSAVED,
            title: title.into(),
            description,
            encrypt: false,
            password_hash: None,
            created_at: now,
            modified_at: now,
        }
    }

    /// Protects this note with `password`.
    pub fn lock(&mut self, password: &str) -> Result<(), NoteValidationError> {
        if password.trim().is_empty() {
            return Err(NoteValidationError::EmptyPassword);
        }
        self.encrypt = true;
        self.password_hash = Some(hash_password(password));
        Ok(())
    }

    /// Removes password protection.
    pub fn unlock(&mut self) {
        self.encrypt = false;
        self.password_hash = None;
    }

    /// Returns whether `candidate` matches the lock password.
    ///
    /// Always `false` for unlocked notes.
    pub fn verify_password(&self, candidate: &str) -> bool {
        match (self.encrypt, self.password_hash.as_deref()) {
            (true, Some(stored)) => stored == hash_password(candidate),
            _ => false,
        }
    }

    /// Checks lock and timestamp invariants.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.encrypt != self.password_hash.is_some() {
            return Err(NoteValidationError::InconsistentLock);
        }
        if self.modified_at < self.created_at {
            return Err(NoteValidationError::InvalidTimestamps {
                created_at: self.created_at,
                modified_at: self.modified_at,
            });
        }
        Ok(())
    }
}

/// Returns the SHA-256 hex digest of `password`.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::hash_password;

    #[test]
    fn hash_password_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
