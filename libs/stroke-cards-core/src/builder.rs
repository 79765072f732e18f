//! Builds the ordered card list from provider data and prior knowledge.

use crate::provider::SuggestionProvider;
use crate::roots::possible_roots;
use crate::strokes::sort_strokes;
use crate::types::Card;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Build cards for every suggestion not in `excluded`, ordered by
/// translation case-insensitively.
///
/// Excluded translations are deleted from the provider (once each) and get no
/// card. `prior_choices` pre-populates chosen strokes from an earlier,
/// unconfirmed run.
pub fn build_cards<P>(
    provider: &mut P,
    excluded: &HashSet<String>,
    prior_choices: &HashMap<String, String>,
) -> Vec<Card>
where
    P: SuggestionProvider + ?Sized,
{
    let mut entries: Vec<_> = provider.entries().collect();
    entries.sort_by(|(a, _), (b, _)| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    let mut cards = Vec::with_capacity(entries.len());
    let mut dropped = Vec::new();

    for (translation, entry) in entries {
        if excluded.contains(translation) {
            dropped.push(translation.to_string());
            continue;
        }

        let mut strokes: Vec<String> = entry.strokes.iter().cloned().collect();
        sort_strokes(&mut strokes);

        let similar_ignored: BTreeSet<String> = possible_roots(translation)
            .into_iter()
            .filter(|root| excluded.contains(root))
            .collect();

        cards.push(Card::new(
            translation,
            strokes,
            entry.frequency,
            prior_choices.get(translation).cloned(),
            similar_ignored,
        ));
    }

    for translation in &dropped {
        tracing::debug!(%translation, "dropping excluded suggestion");
        provider.delete(translation);
    }

    cards
}
