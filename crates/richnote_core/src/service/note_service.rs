//! Note use-case service.
//!
//! # Responsibility
//! - Stamp timestamps and route add/save/delete through the repository.
//! - Gate opening of locked notes behind password verification.
//! - Publish an `AppEvent` for every completed use-case.
//!
//! # Invariants
//! - `created_at` is set once on insert; `modified_at` on every write.
//! - Event delivery failures are logged and never fail the use-case.

use crate::events::{AppEvent, EventPublisher};
use crate::model::note::{now_epoch_ms, Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Write succeeded but read-back disagrees.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Result of asking to open a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Note is unlocked; `NavigateToDetail` was published.
    Opened(Note),
    /// Note is locked; caller must collect a password.
    PasswordRequired(NoteId),
}

/// Note service facade over a repository and the event bus.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    events: EventPublisher,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repo: R, events: EventPublisher) -> Self {
        Self { repo, events }
    }

    /// Inserts `note` as a new row and returns the stored copy.
    pub fn add_note(&self, mut note: Note) -> Result<Note, NoteServiceError> {
        let now = now_epoch_ms();
        note.id = NoteId::UNSAVED;
        note.created_at = now;
        note.modified_at = now;

        let id = self.repo.insert_note(&note)?;
        let stored = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "added note not found in read-back",
            ))?;
        info!("event=note_add module=service status=ok note_id={id}");
        self.publish(AppEvent::NoteAdded(id));
        Ok(stored)
    }

    /// Overwrites an existing note and refreshes `modified_at`.
    pub fn save_note(&self, mut note: Note) -> Result<Note, NoteServiceError> {
        if !note.id.is_saved() {
            return Err(NoteServiceError::NoteNotFound(note.id));
        }
        note.modified_at = now_epoch_ms().max(note.created_at);

        self.repo.update_note(&note)?;
        let stored = self
            .repo
            .get_note(note.id)?
            .ok_or(NoteServiceError::InconsistentState(
                "saved note not found in read-back",
            ))?;
        info!(
            "event=note_save module=service status=ok note_id={}",
            note.id
        );
        self.publish(AppEvent::NoteUpdated(note.id));
        Ok(stored)
    }

    /// Adds drafts and saves notes that already have an id.
    pub fn add_or_save_note(&self, note: Note) -> Result<Note, NoteServiceError> {
        if note.id.is_saved() {
            self.save_note(note)
        } else {
            self.add_note(note)
        }
    }

    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete_note(id)?;
        info!("event=note_delete module=service status=ok note_id={id}");
        self.publish(AppEvent::NoteDeleted(id));
        Ok(())
    }

    pub fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get_note(id)
    }

    /// Lists notes, most recently modified first.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.list_notes()
    }

    /// Opens a note, deferring locked notes to password entry.
    pub fn open_note(&self, id: NoteId) -> Result<OpenOutcome, NoteServiceError> {
        let note = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        if note.encrypt {
            return Ok(OpenOutcome::PasswordRequired(id));
        }
        self.publish(AppEvent::NavigateToDetail(id));
        Ok(OpenOutcome::Opened(note))
    }

    /// Verifies `password` for a locked note.
    ///
    /// Publishes `NavigateToDetail` on success and `PasswordRejected`
    /// otherwise. Returns whether the password matched.
    pub fn unlock_with_password(
        &self,
        id: NoteId,
        password: &str,
    ) -> Result<bool, NoteServiceError> {
        let note = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        let accepted = note.verify_password(password);
        info!(
            "event=note_unlock module=service status={} note_id={id}",
            if accepted { "ok" } else { "rejected" }
        );
        self.publish(if accepted {
            AppEvent::NavigateToDetail(id)
        } else {
            AppEvent::PasswordRejected(id)
        });
        Ok(accepted)
    }

    fn publish(&self, event: AppEvent) {
        if let Err(err) = self.events.try_publish(event) {
            warn!("event=app_event module=service status=dropped error={err}");
        }
    }
}
