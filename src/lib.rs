//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod delivery;
pub mod errors;
pub mod export;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod pivot;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Fetch { .. } => cli::commands::fetch::handle(&cli.command, cfg),
        Commands::Pivot { .. } => cli::commands::pivot::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging diagnostico su stderr
    logging::init_logging(cli.verbose);

    // 3️⃣ config costruita UNA sola volta, poi passata esplicitamente
    let cfg = Config::resolve(&cli)
        .inspect_err(|e| tracing::error!(error = %e, "configuration failed"))?;

    // 4️⃣ passa tutto al dispatcher; ogni errore termina il comando
    dispatch(&cli, &cfg).inspect_err(|e| tracing::error!(error = %e, "command failed"))
}
