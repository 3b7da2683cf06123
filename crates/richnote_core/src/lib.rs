//! Core logic for the RichNote note-taking app.
//!
//! The formatting engine (`format`, `span`, `text`, `codec`, `editor`) is
//! pure and has no I/O. Storage, services, events and logging wrap it for
//! the application.

pub mod codec;
pub mod config;
pub mod db;
pub mod editor;
pub mod events;
pub mod format;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod span;
pub mod text;

pub use codec::{decode, encode, DecodeError};
pub use config::{ConfigError, CoreConfig};
pub use editor::{on_text_changed, EditSession, Selection, TextChange};
pub use events::{AppEvent, EventBus, EventPublisher, EventSubscriber, PublishError};
pub use format::{
    action_for, action_for_descriptor, label_for, style_for, FormatSet, FormattingAction,
    SpanStyle, StyleDescriptor,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{hash_password, Note, NoteId, NoteValidationError};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_service::{NoteService, NoteServiceError, OpenOutcome};
pub use span::{adjust_for_new_length, append_active_span, FormattingSpan};
pub use text::{materialize, AnnotatedText, AnnotatedTextBuilder, StyleRange};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
