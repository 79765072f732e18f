//! Existing-note lookup against an Anki `collection.anki2` file.

use crate::db::error::DbError;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OpenFlags};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use stroke_cards_core::{NoteStore, NoteTypeId};

type Result<T> = std::result::Result<T, DbError>;

const EXISTING_NOTES: &str = "SELECT sfld FROM notes WHERE mid = ?1";

/// Anki collection opened read-only, one connection per query.
#[derive(Debug, Clone)]
pub struct AnkiCollection {
    path: PathBuf,
}

impl AnkiCollection {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn connect(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Ok(Connection::open_with_flags(&self.path, flags)?)
    }
}

impl NoteStore for AnkiCollection {
    type Error = DbError;

    fn existing_notes(&self, note_type: NoteTypeId) -> Result<HashSet<String>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(EXISTING_NOTES)?;
        let rows = stmt.query_map(params![note_type], |row| row.get::<_, Value>(0))?;

        let mut notes = HashSet::new();
        for value in rows {
            notes.insert(field_text(value?)?);
        }

        tracing::debug!(
            path = %self.path.display(),
            note_type,
            count = notes.len(),
            "loaded existing notes"
        );
        Ok(notes)
    }
}

/// `sfld` has integer affinity, so numeric fields come back as numbers.
fn field_text(value: Value) -> Result<String> {
    match value {
        Value::Text(text) => Ok(text),
        Value::Integer(n) => Ok(n.to_string()),
        Value::Real(n) => Ok(n.to_string()),
        Value::Blob(bytes) => String::from_utf8(bytes)
            .map_err(|e| DbError::InvalidData(format!("sort field is not utf-8: {e}"))),
        Value::Null => Err(DbError::InvalidData("sort field is null".to_string())),
    }
}
