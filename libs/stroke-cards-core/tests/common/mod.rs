//! Shared fixtures for session integration tests.
//!
//! Each [`TestFiles`] owns a temporary directory holding the ignore file and
//! the ledger, so tests never touch each other's state.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use stroke_cards_core::{ReviewSession, SuggestionEntry, SuggestionProvider};
use tempfile::TempDir;

/// Note type used throughout the tests; the in-memory note store ignores it.
pub const NOTE_TYPE: i64 = 1_342_697_561_419;

pub struct TestFiles {
    _dir: TempDir,
    pub ignore: PathBuf,
    pub output: PathBuf,
}

impl TestFiles {
    /// Paths nested one level down so saving has to create the parent.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let ignore = dir.path().join("state").join("ignore.txt");
        let output = dir.path().join("state").join("new_notes.csv");
        Self {
            _dir: dir,
            ignore,
            output,
        }
    }

    pub fn write_ignore(&self, content: &str) {
        fs::create_dir_all(self.ignore.parent().unwrap()).unwrap();
        fs::write(&self.ignore, content).unwrap();
    }

    pub fn write_output(&self, content: &str) {
        fs::create_dir_all(self.output.parent().unwrap()).unwrap();
        fs::write(&self.output, content).unwrap();
    }

    pub fn read_ignore(&self) -> String {
        fs::read_to_string(&self.ignore).unwrap()
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(&self.output).unwrap()
    }

    /// Open a session with `notes` as the existing note set.
    pub fn open<P: SuggestionProvider>(&self, notes: &[&str], provider: &mut P) -> ReviewSession {
        let notes = note_set(notes);
        ReviewSession::open(&notes, NOTE_TYPE, &self.ignore, &self.output, provider)
            .expect("open session")
    }
}

pub fn note_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build a provider from `(translation, strokes, frequency)` triples.
pub fn suggestions(entries: &[(&str, &[&str], u64)]) -> BTreeMap<String, SuggestionEntry> {
    entries
        .iter()
        .map(|(translation, strokes, frequency)| {
            (
                translation.to_string(),
                SuggestionEntry::new(strokes.iter().copied(), *frequency),
            )
        })
        .collect()
}

/// Index of `translation` in the session's card order.
pub fn index_of(session: &ReviewSession, translation: &str) -> usize {
    session
        .cards()
        .iter()
        .position(|card| card.translation() == translation)
        .unwrap_or_else(|| panic!("no card for {translation}"))
}
