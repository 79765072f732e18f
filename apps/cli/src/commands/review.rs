//! Line-oriented interactive review of pending cards.
//!
//! For each card the user types a suggestion number, `i` to ignore, an empty
//! line to skip, `q` to stop, or any other text as literal strokes. A number
//! outside the suggestion list is taken as strokes too, since number-key
//! strokes are valid steno.

use std::io::{BufRead, Write};
use stroke_cards_core::{Card, ReviewSession};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Decision {
    Pick(usize),
    Strokes(String),
    Ignore,
    Skip,
    Quit,
}

fn parse_decision(line: &str, card: &Card) -> Decision {
    let line = line.trim();
    match line {
        "" => Decision::Skip,
        "q" | "Q" => Decision::Quit,
        "i" | "I" => Decision::Ignore,
        _ => match line.parse::<usize>() {
            Ok(n) if (1..=card.stroke_suggestions().len()).contains(&n) => Decision::Pick(n - 1),
            _ => Decision::Strokes(line.to_string()),
        },
    }
}

/// Counts of what happened during a review run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub chosen: usize,
    pub ignored: usize,
    pub skipped: usize,
}

/// Walk pending cards until input ends or the user quits. Does not save.
pub fn review<R: BufRead, W: Write>(
    session: &mut ReviewSession,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<ReviewOutcome> {
    let pending: Vec<usize> = session.pending().map(|(index, _)| index).collect();
    let mut outcome = ReviewOutcome::default();

    for (position, index) in pending.iter().copied().enumerate() {
        let card = &session[index];
        writeln!(
            out,
            "[{}/{}] {}  ({})",
            position + 1,
            pending.len(),
            card.translation(),
            card.frequency()
        )?;
        for (n, strokes) in card.stroke_suggestions().iter().enumerate() {
            writeln!(out, "  {}: {strokes}", n + 1)?;
        }
        if !card.similar_ignored().is_empty() {
            let similar: Vec<&str> = card.similar_ignored().iter().map(String::as_str).collect();
            writeln!(out, "  similar to ignored: {}", similar.join(", "))?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_decision(&line, card) {
            Decision::Pick(n) => {
                let strokes = card.stroke_suggestions()[n].clone();
                session.choose_strokes(index, strokes)?;
                outcome.chosen += 1;
            }
            Decision::Strokes(strokes) => {
                session.choose_strokes(index, strokes)?;
                outcome.chosen += 1;
            }
            Decision::Ignore => {
                session.ignore(index)?;
                outcome.ignored += 1;
            }
            Decision::Skip => outcome.skipped += 1,
            Decision::Quit => break,
        }
    }

    tracing::debug!(?outcome, "review finished");
    Ok(outcome)
}
