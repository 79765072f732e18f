//! Ordering of stroke sequences, most concise first.

use std::cmp::Ordering;

/// Separator between strokes in a multi-stroke sequence.
pub const STROKE_SEPARATOR: char = '/';

/// Sort key: fewer strokes, then shorter text, then plain string order.
pub fn sort_key(strokes: &str) -> (usize, usize, &str) {
    (
        strokes.matches(STROKE_SEPARATOR).count(),
        strokes.chars().count(),
        strokes,
    )
}

pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sort stroke sequences in place, most preferred first.
pub fn sort_strokes(strokes: &mut [String]) {
    strokes.sort_by(|a, b| compare(a, b));
}
