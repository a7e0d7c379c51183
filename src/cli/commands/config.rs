use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if !*print_config {
            info("Nothing to do: use --print to show the configuration.");
            return Ok(());
        }

        let origin = if path.exists() { "" } else { " (defaults, file not found)" };
        println!("📄 Current configuration ({}){}:\n", path.display(), origin);
        print!("{}", cfg.to_yaml()?);
    }

    Ok(())
}
