//! rOvertime library root.
//! Exposes the CLI parser, the high-level run() function and the calculation
//! core (time codec, attendance extractor, overtime analyzer).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod page;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Records { .. } => cli::commands::records::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };

    // config is loaded once per run
    let cfg = Config::load(&config_path)?;

    dispatch(&cli, &cfg, &config_path)
}
