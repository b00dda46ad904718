pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod store;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{Cli, Command, DeckCommand};
use crate::config::Config;
use crate::loader::{load_cards, Deck};
use crate::store::ProgressStore;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.corpus, cli.embedded, cli.progress);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = match cli.command {
        Command::Highlight { file } => {
            let code = read_source(file.as_deref()).await?;
            format!("{}\n", concept_cards_core::highlight(&code))
        }
        Command::Deck(command) => {
            let deck = load_cards(&config).await;
            tracing::info!(source = %deck.source, cards = deck.len(), "deck ready");
            let store = ProgressStore::new(&config.progress_path);
            execute(command, &deck, &store).await?
        }
    };

    print!("{}", output);
    Ok(())
}

/// Run a deck subcommand, persisting progress where the command changes it.
pub async fn execute(
    command: DeckCommand,
    deck: &Deck,
    store: &ProgressStore,
) -> anyhow::Result<String> {
    if deck.is_empty() {
        return Ok(format!("{}\n", commands::EMPTY_STATE));
    }

    let mut progress = store.load().await;
    let total = deck.len();

    let output = match command {
        DeckCommand::List => commands::list_cards(&deck.cards, &progress),
        DeckCommand::Show { index } => {
            let index = index.unwrap_or_else(|| progress.clamped_index(total));
            commands::show_card(&deck.cards, index)?
        }
        DeckCommand::Next => {
            let index = progress.advance(total);
            save(store, &progress).await?;
            let mut out = commands::show_card(&deck.cards, index)?;
            out.push_str(&commands::status_line(total, &progress));
            out
        }
        DeckCommand::Reset => {
            progress.reset();
            save(store, &progress).await?;
            commands::status_line(total, &progress)
        }
        DeckCommand::Export { out } => {
            let page = commands::export_page(&deck.cards);
            match out {
                Some(path) => {
                    tokio::fs::write(&path, page)
                        .await
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), cards = total, "exported cards");
                    format!("Exported {} cards to {}\n", total, path.display())
                }
                None => page,
            }
        }
    };

    Ok(output)
}

async fn read_source(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .context("failed to read stdin")?;
            Ok(code)
        }
    }
}

async fn save(store: &ProgressStore, progress: &concept_cards_core::Progress) -> anyhow::Result<()> {
    store
        .save(progress)
        .await
        .with_context(|| format!("failed to save progress to {}", store.path().display()))
}
