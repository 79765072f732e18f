//! Command handlers driven by the CLI.

pub mod decide;
pub mod list;
pub mod review;

pub use decide::{choose, ignore};
pub use list::list;
pub use review::{review, ReviewOutcome};

use stroke_cards_core::Card;

/// One-line summary of a card for terminal output.
pub(crate) fn describe(index: usize, card: &Card) -> String {
    let mut line = format!(
        "{index:>4}  {}  ({})  {}",
        card.translation(),
        card.frequency(),
        card.stroke_suggestions().join(", ")
    );

    if let Some(strokes) = card.chosen_strokes() {
        line.push_str(&format!("  -> {strokes}"));
    } else if card.is_ignored() {
        line.push_str("  [ignored]");
    }

    if !card.similar_ignored().is_empty() {
        let similar: Vec<&str> = card.similar_ignored().iter().map(String::as_str).collect();
        line.push_str(&format!("  ~ {}", similar.join(", ")));
    }

    line
}
