use anyhow::Context;
use wordbook_core::{DictionaryCore, normalize_word};

use crate::cli::Command;
use crate::render::{format_row, format_rows, format_word_of_the_day};

/// One-shot subcommands; the shell is driven by the controller instead
pub async fn run_command(core: &mut DictionaryCore, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { filter, category } => {
            let rows = core.query(filter.trim(), category.as_deref()).await;
            println!("{}", format_rows(&rows));
        }
        Command::Add {
            word,
            definition,
            phonetics,
            category,
        } => {
            core.upsert(&word, &definition, &phonetics, &category)
                .context("Both word and definition are required")?;
            println!("Saved {}", normalize_word(&word));
        }
        Command::Remove { word } => {
            if core.remove(&word) {
                println!("Deleted {word}");
            } else {
                println!("{word} was not in the dictionary");
            }
        }
        Command::Show { word } => match core.view(&word) {
            Some((key, entry)) => println!("{}", format_row(&key, &entry)),
            None => anyhow::bail!("{word} is not in the dictionary"),
        },
        Command::Recent => {
            for word in core.recently_viewed() {
                println!("{word}");
            }
        }
        Command::Categories => {
            for category in core.categories() {
                println!("{category}");
            }
        }
        Command::Export { dir } => {
            let path = core
                .export_to(&dir)
                .with_context(|| format!("Failed to export into {}", dir.display()))?;
            println!("Exported to {}", path.display());
        }
        Command::Import { file } => {
            let count = core
                .import_from(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            println!("Imported {count} entries");
        }
        Command::WordOfTheDay => {
            let word = core.word_of_the_day().await;
            println!("{}", format_word_of_the_day(&word));
        }
        Command::Shell { .. } => {
            tracing::warn!("shell is not a one-shot command");
        }
    }

    Ok(())
}
