//! Core types: suggestion data consumed from a provider and the reviewable card.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stroke data recorded for one translation by a suggestion provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub strokes: BTreeSet<String>,
    #[serde(default)]
    pub frequency: u64,
}

impl SuggestionEntry {
    pub fn new<I, S>(strokes: I, frequency: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strokes: strokes.into_iter().map(Into::into).collect(),
            frequency,
        }
    }
}

/// Review state of a card as seen by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Pending,
    Chosen,
    Ignored,
}

/// One reviewable suggestion.
///
/// `ignored` and `chosen_strokes` are never both set: the only mutations are
/// [`Card::choose_strokes`] and [`Card::ignore`], and each clears the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    translation: String,
    stroke_suggestions: Vec<String>,
    frequency: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    chosen_strokes: Option<String>,
    ignored: bool,
    similar_ignored: BTreeSet<String>,
}

impl Card {
    /// Create a card. `stroke_suggestions` is stored as given; the builder
    /// sorts it before calling this.
    pub fn new(
        translation: impl Into<String>,
        stroke_suggestions: Vec<String>,
        frequency: u64,
        chosen_strokes: Option<String>,
        similar_ignored: BTreeSet<String>,
    ) -> Self {
        Self {
            translation: translation.into(),
            stroke_suggestions,
            frequency,
            chosen_strokes,
            ignored: false,
            similar_ignored,
        }
    }

    /// Word or phrase the strokes produce; fixed for the card's lifetime.
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Suggested stroke sequences, most concise first.
    pub fn stroke_suggestions(&self) -> &[String] {
        &self.stroke_suggestions
    }

    /// Occurrence count reported by the provider, for display only.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Strokes the user committed to. An empty choice counts as none.
    pub fn chosen_strokes(&self) -> Option<&str> {
        self.chosen_strokes.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Root forms of the translation that are already excluded. A non-empty
    /// set hints that this is a variant of a word the user has seen.
    pub fn similar_ignored(&self) -> &BTreeSet<String> {
        &self.similar_ignored
    }

    pub fn status(&self) -> CardStatus {
        match (self.ignored, self.chosen_strokes()) {
            (true, _) => CardStatus::Ignored,
            (false, Some(_)) => CardStatus::Chosen,
            (false, None) => CardStatus::Pending,
        }
    }

    /// Commit to a stroke sequence, overwriting any earlier choice.
    pub fn choose_strokes(&mut self, strokes: impl Into<String>) {
        self.ignored = false;
        self.chosen_strokes = Some(strokes.into());
    }

    /// Reject the suggestion, dropping any chosen strokes.
    pub fn ignore(&mut self) {
        self.ignored = true;
        self.chosen_strokes = None;
    }

    /// Ledger line for this card, or `None` unless it holds a choice.
    pub fn render(&self) -> Option<String> {
        match (self.ignored, self.chosen_strokes()) {
            (false, Some(strokes)) => Some(format!(
                "{},{}",
                quote(&self.translation),
                quote(strokes)
            )),
            _ => None,
        }
    }
}

/// CSV field quoting: wrap in double quotes and double any inner quote.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
