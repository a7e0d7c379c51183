use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::render::{ensure_writable, records};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { input, file, force } = cmd {
        let Some(report) = super::run_pipeline(input, cfg)? else {
            return Ok(());
        };

        match file {
            Some(path) => {
                ensure_writable(path, *force)?;
                records::write_records_csv(path, &report.records)?;
                success(format!(
                    "{} records written to {}",
                    report.records.len(),
                    path.display()
                ));
            }
            None => print!("{}", records::render_records(&report.records, cfg.color)),
        }
    }
    Ok(())
}
