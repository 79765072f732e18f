//! Read-only access to notes that already exist in the host application.

use std::collections::HashSet;
use std::convert::Infallible;

/// Identifier of a note type (Anki model id).
pub type NoteTypeId = i64;

/// Source of translations that already have a note.
pub trait NoteStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Primary-field text of every note of `note_type`.
    fn existing_notes(&self, note_type: NoteTypeId) -> Result<HashSet<String>, Self::Error>;
}

/// A fixed set of notes, regardless of note type.
impl NoteStore for HashSet<String> {
    type Error = Infallible;

    fn existing_notes(&self, _note_type: NoteTypeId) -> Result<HashSet<String>, Self::Error> {
        Ok(self.clone())
    }
}
