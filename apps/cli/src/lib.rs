pub mod commands;
pub mod config;
pub mod db;
pub mod state;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, Command, Config};
use crate::state::AppState;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_args(cli.paths);
    tracing::debug!(?config, "resolved configuration");

    let mut state = AppState::load(config)?;
    let mut session = state.open_session()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List { all, json } => commands::list(&session, all, json, &mut out)?,
        Command::Choose { index, strokes } => {
            commands::choose(&mut session, index, &strokes, &mut out)?
        }
        Command::Ignore { indices } => commands::ignore(&mut session, &indices, &mut out)?,
        Command::Review => {
            let stdin = io::stdin();
            let outcome = commands::review(&mut session, stdin.lock(), &mut out)?;
            let summary = session.save().context("saving session")?;
            writeln!(
                out,
                "{} chosen, {} ignored, {} skipped; {} rows appended to {}",
                outcome.chosen,
                outcome.ignored,
                outcome.skipped,
                summary.appended,
                session.output_path().display()
            )?;
        }
    }

    Ok(())
}
