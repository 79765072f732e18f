//! Listing the card queue.

use super::describe;
use serde::Serialize;
use std::io::Write;
use stroke_cards_core::{Card, CardStatus, ReviewSession};

#[derive(Debug, Serialize)]
struct CardView<'a> {
    index: usize,
    status: CardStatus,
    #[serde(flatten)]
    card: &'a Card,
}

/// Print pending cards, or every card when `all` is set.
pub fn list<W: Write>(
    session: &ReviewSession,
    all: bool,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let views: Vec<CardView<'_>> = session
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| all || card.status() == CardStatus::Pending)
        .map(|(index, card)| CardView {
            index,
            status: card.status(),
            card,
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &views)?;
        writeln!(out)?;
        return Ok(());
    }

    for view in &views {
        writeln!(out, "{}", describe(view.index, view.card))?;
    }
    writeln!(out, "{} of {} cards", views.len(), session.len())?;
    Ok(())
}
