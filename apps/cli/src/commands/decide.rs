//! One-shot choose and ignore commands. Each saves the session.

use anyhow::Context;
use std::io::Write;
use stroke_cards_core::ReviewSession;

pub fn choose<W: Write>(
    session: &mut ReviewSession,
    index: usize,
    strokes: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    session.choose_strokes(index, strokes)?;
    let summary = session.save().context("saving session")?;
    writeln!(
        out,
        "{} -> {strokes} ({} rows appended to {})",
        session[index].translation(),
        summary.appended,
        session.output_path().display()
    )?;
    Ok(())
}

pub fn ignore<W: Write>(
    session: &mut ReviewSession,
    indices: &[usize],
    out: &mut W,
) -> anyhow::Result<()> {
    for &index in indices {
        session.ignore(index)?;
        writeln!(out, "ignored {}", session[index].translation())?;
    }
    let summary = session.save().context("saving session")?;
    writeln!(
        out,
        "{} translations ignored in total ({})",
        summary.ignored,
        session.ignore_path().display()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::{BTreeMap, HashSet};
    use std::fs;
    use stroke_cards_core::SuggestionEntry;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> ReviewSession {
        let mut provider = BTreeMap::from([
            ("cat".to_string(), SuggestionEntry::new(["KAT"], 3)),
            ("dog".to_string(), SuggestionEntry::new(["TKOG"], 2)),
        ]);
        ReviewSession::open(
            &HashSet::<String>::new(),
            1,
            dir.path().join("ignore.txt"),
            dir.path().join("new_notes.csv"),
            &mut provider,
        )
        .unwrap()
    }

    #[test]
    fn choose_saves_and_reports_ledger_path() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        let mut out = Vec::new();

        choose(&mut session, 0, "KAT", &mut out).unwrap();

        let ledger = dir.path().join("new_notes.csv");
        assert_eq!(fs::read_to_string(&ledger).unwrap(), "\"cat\",\"KAT\"\n");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("cat -> KAT (1 rows appended to {})\n", ledger.display())
        );
    }

    #[test]
    fn ignore_saves_and_reports_ignore_path() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        let mut out = Vec::new();

        ignore(&mut session, &[1], &mut out).unwrap();

        let ignore_file = dir.path().join("ignore.txt");
        assert_eq!(fs::read_to_string(&ignore_file).unwrap(), "dog");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "ignored dog\n1 translations ignored in total ({})\n",
                ignore_file.display()
            )
        );
    }
}
