use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordbook_config::Config;

pub mod cli;
pub mod commands;
pub mod controller;
pub mod events;
pub mod io;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => Config::new(),
    };
    cli.apply_overrides(&mut config);

    let state = AppState::new(config, cli.ephemeral);
    let mut core = state.open_core()?;

    match cli.command.unwrap_or(Command::Shell { category: None }) {
        Command::Shell { category } => {
            let interactive = atty::is(atty::Stream::Stdin);
            controller::run_shell(core, category, state.debounce(), interactive).await
        }
        command => commands::run_command(&mut core, command).await,
    }
}

/// Logs go to stderr so command output stays clean
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
