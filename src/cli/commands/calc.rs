use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::render::{OutputFormat, json, panel, text};
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { input, format } = cmd {
        let Some(report) = super::run_pipeline(input, cfg)? else {
            return Ok(());
        };

        match format.unwrap_or(cfg.default_format) {
            OutputFormat::Table => {
                header("残業時間分析");
                print!("{}", text::render_summary(&report, cfg.color));
            }
            OutputFormat::Json => println!("{}", json::render_json(&report)?),
            OutputFormat::Html => print!("{}", panel::render_panel(&report.summary)),
        }
    }
    Ok(())
}
