pub mod calc;
pub mod config;
pub mod convert;
pub mod init;
pub mod records;

use crate::cli::parser::SnapshotArgs;
use crate::config::Config;
use crate::core::calculator::policy::PolicyOverrides;
use crate::core::logic::{Core, Report};
use crate::errors::{AppError, AppResult};
use crate::page;
use crate::utils::{date, time};

/// Strict H:MM for values typed by the user; the page parser is lenient.
fn parse_monthly(s: &str) -> AppResult<time::Minutes> {
    let digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    let valid = s
        .trim()
        .split_once(':')
        .is_some_and(|(h, m)| digits(h) && digits(m));

    if !valid {
        return Err(AppError::InvalidTime(s.to_string()));
    }
    Ok(time::parse_minutes(s))
}

fn overrides(input: &SnapshotArgs, cfg: &Config) -> AppResult<PolicyOverrides> {
    let monthly = match input.monthly.as_deref().or(cfg.monthly_standard.as_deref()) {
        Some(s) => Some(parse_monthly(s)?),
        None => None,
    };

    Ok(PolicyOverrides {
        monthly_standard_minutes: monthly,
        standard_work_days: input.days.or(cfg.standard_work_days),
    })
}

/// Load the snapshot and run one full calculation.
/// `Ok(None)` means the page was not ready; a message was already printed.
pub(crate) fn run_pipeline(input: &SnapshotArgs, cfg: &Config) -> AppResult<Option<Report>> {
    let snapshot = page::load_snapshot(&input.snapshot)?;

    let today = match &input.today {
        Some(t) => date::parse_today(t)?,
        None => date::today(),
    };

    let policy_overrides = overrides(input, cfg)?;

    Ok(Core::recompute(&snapshot, today, &policy_overrides, &cfg.panel_container))
}
