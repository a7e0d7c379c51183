use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::utils::time::{format_minutes, parse_minutes};

/// `convert 510` -> `8:30`, `convert 8:30` -> `510`.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Convert { value } = cmd {
        match value.trim().parse::<i64>() {
            Ok(mins) => println!("{}", format_minutes(mins)),
            Err(_) => println!("{}", parse_minutes(value)),
        }
    }
    Ok(())
}
