//! Sources of stroke suggestions.

use crate::error::{Error, Result};
use crate::types::SuggestionEntry;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Source of suggestions keyed by translation.
///
/// `delete` permanently drops an entry upstream; it is called for every
/// suggestion that is already known or ignored.
pub trait SuggestionProvider {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &SuggestionEntry)> + '_>;

    fn delete(&mut self, translation: &str);
}

impl SuggestionProvider for HashMap<String, SuggestionEntry> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &SuggestionEntry)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn delete(&mut self, translation: &str) {
        self.remove(translation);
    }
}

impl SuggestionProvider for BTreeMap<String, SuggestionEntry> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &SuggestionEntry)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }

    fn delete(&mut self, translation: &str) {
        self.remove(translation);
    }
}

/// Suggestions stored as a JSON object on disk.
///
/// ```json
/// { "jumping": { "strokes": ["JUMP/ING", "JUMPG"], "frequency": 5 } }
/// ```
#[derive(Debug)]
pub struct JsonSuggestions {
    path: PathBuf,
    entries: BTreeMap<String, SuggestionEntry>,
    dirty: bool,
}

impl JsonSuggestions {
    /// Load suggestions from `path`. A missing file yields an empty provider.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| Error::Json {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(Error::io(path, e)),
        };

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, translation: &str) -> Option<&SuggestionEntry> {
        self.entries.get(translation)
    }

    /// Write the file back if any entry was deleted. Returns whether it wrote.
    pub fn save(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(&self.entries).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "saved suggestions");
        self.dirty = false;
        Ok(true)
    }
}

impl SuggestionProvider for JsonSuggestions {
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &SuggestionEntry)> + '_> {
        SuggestionProvider::entries(&self.entries)
    }

    fn delete(&mut self, translation: &str) {
        if self.entries.remove(translation).is_some() {
            self.dirty = true;
        }
    }
}
