use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wordbook_config::Config;
use wordbook_types::DEFAULT_CATEGORY;

#[derive(Parser)]
#[command(name = "wordbook", about = "Personal dictionary with online lookup")]
pub struct Cli {
    /// JSON config file, replaces environment-based config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory holding the dictionary files
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
    /// Never contact the lookup service
    #[arg(long, global = true)]
    pub offline: bool,
    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,
    /// Log level, RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = dir.clone();
        }
        if self.offline {
            config.lookup.enabled = false;
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List words, fetching the filter text if nothing matches
    List {
        #[arg(long, short, default_value = "")]
        filter: String,
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Add or replace a word
    Add {
        word: String,
        definition: String,
        #[arg(long, default_value = "")]
        phonetics: String,
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
    },
    Remove {
        word: String,
    },
    /// Show one word and mark it as viewed
    Show {
        word: String,
    },
    /// Recently viewed words, newest first
    Recent,
    Categories,
    /// Write dictionary_backup.json
    Export {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Merge a backup file into the dictionary
    Import {
        file: PathBuf,
    },
    WordOfTheDay,
    /// Interactive search, one query per line
    Shell {
        #[arg(long, short)]
        category: Option<String>,
    },
}
