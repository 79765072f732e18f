//! Core library for turning stroke suggestions into reviewable cards.
//!
//! Provides:
//! - Root-form heuristic for spotting inflected variants of ignored words
//! - Stroke ordering (fewest strokes, then shortest, then lexical)
//! - Card review state and the card set builder
//! - Review session with ignore-file and ledger persistence
//! - Suggestion provider trait and a JSON-file provider

pub mod builder;
pub mod error;
pub mod ledger;
pub mod notes;
pub mod provider;
pub mod roots;
pub mod session;
pub mod strokes;
pub mod types;

pub use builder::build_cards;
pub use error::{Error, Result};
pub use notes::{NoteStore, NoteTypeId};
pub use provider::{JsonSuggestions, SuggestionProvider};
pub use roots::possible_roots;
pub use session::{ReviewSession, SaveSummary};
pub use types::{Card, CardStatus, SuggestionEntry};
