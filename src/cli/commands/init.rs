use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
/// In test mode nothing is written.
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing rOvertime…");

    if cli.test {
        info(format!("Test mode: config file not written ({})", path.display()));
        return Ok(());
    }

    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
        return Ok(());
    }

    Config::init(path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
