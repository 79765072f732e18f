//! Review session: the ordered card queue plus ignore bookkeeping.
//!
//! A session exclusively owns its ignore file and ledger until it is dropped.
//! Nothing is locked, so two sessions saving to the same files will race.

use crate::builder::build_cards;
use crate::error::{Error, Result};
use crate::ledger;
use crate::notes::{NoteStore, NoteTypeId};
use crate::provider::SuggestionProvider;
use crate::types::{Card, CardStatus};
use std::collections::HashSet;
use std::ops::Index;
use std::path::{Path, PathBuf};

/// What a call to [`ReviewSession::save`] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveSummary {
    /// Ledger rows appended.
    pub appended: usize,
    /// Size of the ignore set written.
    pub ignored: usize,
}

#[derive(Debug)]
pub struct ReviewSession {
    ignore_path: PathBuf,
    output_path: PathBuf,
    ignored: HashSet<String>,
    new_ignored: HashSet<String>,
    cards: Vec<Card>,
}

impl ReviewSession {
    /// Load prior state and build the card queue.
    ///
    /// Suggestions that already have a note or are ignored are deleted from
    /// `provider`.
    pub fn open<N, P>(
        notes: &N,
        note_type: NoteTypeId,
        ignore_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        provider: &mut P,
    ) -> Result<Self>
    where
        N: NoteStore + ?Sized,
        P: SuggestionProvider + ?Sized,
    {
        let ignore_path = ignore_path.into();
        let output_path = output_path.into();

        let existing = notes
            .existing_notes(note_type)
            .map_err(|e| Error::NoteStore(Box::new(e)))?;
        let ignored = ledger::load_ignored(&ignore_path)?;
        let prior_choices = ledger::load_prior_choices(&output_path)?;

        let excluded: HashSet<String> = existing.union(&ignored).cloned().collect();
        let cards = build_cards(provider, &excluded, &prior_choices);

        tracing::info!(
            existing = existing.len(),
            ignored = ignored.len(),
            resumed = prior_choices.len(),
            cards = cards.len(),
            "opened review session"
        );

        Ok(Self {
            ignore_path,
            output_path,
            ignored,
            new_ignored: HashSet::new(),
            cards,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards not yet chosen or ignored, with their indices.
    pub fn pending(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.status() == CardStatus::Pending)
    }

    /// Ignore set loaded at session start.
    pub fn ignored(&self) -> &HashSet<String> {
        &self.ignored
    }

    /// Translations ignored during this session.
    pub fn new_ignored(&self) -> &HashSet<String> {
        &self.new_ignored
    }

    pub fn ignore_path(&self) -> &Path {
        &self.ignore_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut Card> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or(Error::CardIndex { index, len })
    }

    /// Choose strokes for a card. Retracts an ignore made earlier in this
    /// session; ignores from previous sessions stay on file.
    pub fn choose_strokes(&mut self, index: usize, strokes: impl Into<String>) -> Result<()> {
        let card = self.card_mut(index)?;
        card.choose_strokes(strokes);
        let translation = card.translation().to_string();
        self.new_ignored.remove(&translation);
        Ok(())
    }

    pub fn ignore(&mut self, index: usize) -> Result<()> {
        let card = self.card_mut(index)?;
        card.ignore();
        let translation = card.translation().to_string();
        self.new_ignored.insert(translation);
        Ok(())
    }

    /// Append chosen cards to the ledger and rewrite the ignore file.
    ///
    /// Not deduplicated: saving twice appends the same rows twice. Reloads
    /// take the last row per translation, so append order matters.
    pub fn save(&self) -> Result<SaveSummary> {
        let rows: Vec<String> = self.cards.iter().filter_map(Card::render).collect();
        let appended = rows.len();
        ledger::append_ledger(&self.output_path, rows)?;

        let all_ignored: HashSet<&String> = self.ignored.union(&self.new_ignored).collect();
        ledger::save_ignored(&self.ignore_path, all_ignored.iter().copied())?;

        let summary = SaveSummary {
            appended,
            ignored: all_ignored.len(),
        };
        tracing::info!(
            appended = summary.appended,
            ignored = summary.ignored,
            output = %self.output_path.display(),
            "saved review session"
        );
        Ok(summary)
    }
}

impl Index<usize> for ReviewSession {
    type Output = Card;

    /// Panics when `index` is out of range, like slice indexing.
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a ReviewSession {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
