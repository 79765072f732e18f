//! Persistence of the ignore list and the append-only output ledger.
//!
//! The ignore file holds one translation per line, sorted on write. The
//! ledger holds `"translation","strokes"` CSV rows and only ever grows; when
//! it is read back the last row for a translation wins.

use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read a file, treating a missing file as `None`.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Load the ignore set. A missing file is an empty set.
pub fn load_ignored(path: &Path) -> Result<HashSet<String>> {
    Ok(read_optional(path)?
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default())
}

/// Overwrite the ignore file with `ignored`, sorted, newline-joined.
pub fn save_ignored<'a, I>(path: &Path, ignored: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let sorted: BTreeSet<&str> = ignored.into_iter().map(String::as_str).collect();
    let content = sorted.into_iter().collect::<Vec<_>>().join("\n");

    ensure_parent(path)?;
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Parse ledger rows into translation -> strokes, later rows winning.
///
/// Rows that do not have exactly two fields, or fail to parse, are skipped.
pub fn parse_ledger(content: &str) -> HashMap<String, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut choices = HashMap::new();
    for record in reader.records().flatten() {
        if record.len() == 2 {
            choices.insert(record[0].to_string(), record[1].to_string());
        }
    }
    choices
}

/// Load prior, not yet confirmed choices from the ledger.
pub fn load_prior_choices(path: &Path) -> Result<HashMap<String, String>> {
    Ok(read_optional(path)?
        .map(|content| parse_ledger(&content))
        .unwrap_or_default())
}

/// Append `rows` to the ledger as one newline-joined block plus a trailing
/// newline. An empty block still appends the newline.
pub fn append_ledger<I>(path: &Path, rows: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let mut block = rows.into_iter().collect::<Vec<_>>().join("\n");
    block.push('\n');

    ensure_parent(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(block.as_bytes())
        .map_err(|e| Error::io(path, e))
}
