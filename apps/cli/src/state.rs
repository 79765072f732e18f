//! Application state shared by the commands.

use crate::config::Config;
use crate::db::AnkiCollection;
use anyhow::Context;
use stroke_cards_core::{JsonSuggestions, ReviewSession};

pub struct AppState {
    pub config: Config,
    pub suggestions: JsonSuggestions,
}

impl AppState {
    pub fn load(config: Config) -> anyhow::Result<Self> {
        let suggestions = JsonSuggestions::open(&config.suggestions)
            .with_context(|| format!("loading suggestions from {}", config.suggestions.display()))?;
        Ok(Self {
            config,
            suggestions,
        })
    }

    /// Open a review session and persist the suggestions it dropped.
    pub fn open_session(&mut self) -> anyhow::Result<ReviewSession> {
        let collection = AnkiCollection::new(&self.config.collection);
        let session = ReviewSession::open(
            &collection,
            self.config.note_type,
            &self.config.ignore,
            &self.config.output,
            &mut self.suggestions,
        )
        .context("opening review session")?;

        self.suggestions
            .save()
            .context("saving pruned suggestions")?;
        Ok(session)
    }
}
