//! Command-line and environment configuration.
//!
//! Every option can also be supplied through a `STROKE_CARDS_*` environment
//! variable, and a `.env` file in the working directory is loaded first.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use stroke_cards_core::NoteTypeId;

const APP_DIR: &str = "stroke-cards";
const SUGGESTIONS_FILE: &str = "card_suggestions.json";
const IGNORE_FILE: &str = "ignore.txt";
const OUTPUT_FILE: &str = "new_notes.csv";

#[derive(Debug, Parser)]
#[command(
    name = "stroke-cards",
    about = "Review stroke suggestions and collect them as flashcards",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub paths: PathArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Anki collection file (collection.anki2), opened read-only
    #[arg(long, env = "STROKE_CARDS_COLLECTION")]
    pub collection: PathBuf,

    /// Anki note type id whose notes count as already known
    #[arg(long, env = "STROKE_CARDS_NOTE_TYPE")]
    pub note_type: NoteTypeId,

    /// Suggestion file written by the stroke recorder
    #[arg(long, env = "STROKE_CARDS_SUGGESTIONS")]
    pub suggestions: Option<PathBuf>,

    /// File of translations never to suggest again
    #[arg(long, env = "STROKE_CARDS_IGNORE")]
    pub ignore: Option<PathBuf>,

    /// CSV ledger that accepted cards are appended to
    #[arg(long, env = "STROKE_CARDS_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the card queue
    List {
        /// Include chosen and ignored cards
        #[arg(long)]
        all: bool,
        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Choose strokes for a card and save
    Choose {
        /// Card index as shown by `list`
        index: usize,
        /// Stroke sequence, e.g. KAT or JUMP/ING
        strokes: String,
    },

    /// Ignore one or more cards and save
    Ignore {
        /// Card indices as shown by `list`
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Step through pending cards interactively
    Review,
}

/// Resolved file locations and note type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub collection: PathBuf,
    pub note_type: NoteTypeId,
    pub suggestions: PathBuf,
    pub ignore: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Fill unset paths with defaults under the local data directory.
    pub fn from_args(args: PathArgs) -> Self {
        Self::with_data_dir(args, &default_data_dir())
    }

    pub fn with_data_dir(args: PathArgs, data_dir: &Path) -> Self {
        Self {
            collection: args.collection,
            note_type: args.note_type,
            suggestions: args
                .suggestions
                .unwrap_or_else(|| data_dir.join(SUGGESTIONS_FILE)),
            ignore: args.ignore.unwrap_or_else(|| data_dir.join(IGNORE_FILE)),
            output: args.output.unwrap_or_else(|| data_dir.join(OUTPUT_FILE)),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_choose() {
        let cli = Cli::try_parse_from([
            "stroke-cards",
            "--collection",
            "/tmp/collection.anki2",
            "--note-type",
            "1342697561419",
            "--ignore",
            "/tmp/ignore.txt",
            "choose",
            "3",
            "KAT",
        ])
        .unwrap();

        assert_eq!(cli.paths.note_type, 1342697561419);
        assert_eq!(cli.paths.ignore, Some(PathBuf::from("/tmp/ignore.txt")));
        match cli.command {
            Command::Choose { index, strokes } => {
                assert_eq!(index, 3);
                assert_eq!(strokes, "KAT");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ignore_requires_an_index() {
        let result = Cli::try_parse_from([
            "stroke-cards",
            "--collection",
            "c.anki2",
            "--note-type",
            "1",
            "ignore",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unset_paths_default_to_data_dir() {
        let args = PathArgs {
            collection: PathBuf::from("collection.anki2"),
            note_type: 1,
            suggestions: None,
            ignore: Some(PathBuf::from("mine.txt")),
            output: None,
        };

        let config = Config::with_data_dir(args, Path::new("/data/stroke-cards"));

        assert_eq!(
            config,
            Config {
                collection: PathBuf::from("collection.anki2"),
                note_type: 1,
                suggestions: PathBuf::from("/data/stroke-cards/card_suggestions.json"),
                ignore: PathBuf::from("mine.txt"),
                output: PathBuf::from("/data/stroke-cards/new_notes.csv"),
            }
        );
    }
}
