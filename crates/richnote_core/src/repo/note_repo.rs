//! Note repository contract and SQLite implementation.

use crate::codec::{self, DecodeError};
use crate::db::DbError;
use crate::model::note::{Note, NoteId, NoteValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    encrypt,
    password_hash,
    created_at,
    modified_at
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Db(DbError),
    NotFound(NoteId),
    /// Stored description could not be decoded.
    Decode { id: NoteId, source: DecodeError },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Decode { id, source } => {
                write!(f, "note {id} has a corrupt description: {source}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for notes.
pub trait NoteRepository {
    /// Inserts `note`, replacing any row with the same saved id.
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId>;
    /// Overwrites every field of an existing note.
    fn update_note(&self, note: &Note) -> RepoResult<()>;
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// All notes, most recently modified first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Wraps a connection returned by `db::open_db*`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId> {
        note.validate()?;
        let description = codec::encode(&note.description);

        if note.id.is_saved() {
            self.conn.execute(
                "INSERT OR REPLACE INTO notes (
                    id, title, description, encrypt, password_hash, created_at, modified_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    note.id.0,
                    note.title.as_str(),
                    description,
                    note.encrypt,
                    note.password_hash.as_deref(),
                    note.created_at,
                    note.modified_at,
                ],
            )?;
            return Ok(note.id);
        }

        self.conn.execute(
            "INSERT INTO notes (
                title, description, encrypt, password_hash, created_at, modified_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                note.title.as_str(),
                description,
                note.encrypt,
                note.password_hash.as_deref(),
                note.created_at,
                note.modified_at,
            ],
        )?;
        Ok(NoteId(self.conn.last_insert_rowid()))
    }

    fn update_note(&self, note: &Note) -> RepoResult<()> {
        note.validate()?;
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = ?2,
                description = ?3,
                encrypt = ?4,
                password_hash = ?5,
                created_at = ?6,
                modified_at = ?7
             WHERE id = ?1;",
            params![
                note.id.0,
                note.title.as_str(),
                codec::encode(&note.description),
                note.encrypt,
                note.password_hash.as_deref(),
                note.created_at,
                note.modified_at,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(note.id));
        }
        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.0])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.0])?;
        match rows.next()? {
            Some(row) => parse_note_row(row).map(Some),
            None => Ok(None),
        }
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} ORDER BY modified_at DESC, id DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let id = NoteId(row.get("id")?);
    let serialized: String = row.get("description")?;
    let description =
        codec::decode(&serialized).map_err(|source| RepoError::Decode { id, source })?;

    let note = Note {
        id,
        title: row.get("title")?,
        description,
        encrypt: row.get("encrypt")?,
        password_hash: row.get("password_hash")?,
        created_at: row.get("created_at")?,
        modified_at: row.get("modified_at")?,
    };
    note.validate()
        .map_err(|err| RepoError::InvalidData(format!("note {id}: {err}")))?;
    Ok(note)
}
