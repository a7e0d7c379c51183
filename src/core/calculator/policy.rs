//! Reads the month's policy figures from the page info tables.

use crate::models::policy::Policy;
use crate::page::{MONTHLY_STANDARD_LABEL, PageReader, STANDARD_WORK_DAYS_LABEL};
use crate::utils::time::{self, Minutes};
use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)").expect("valid digits pattern"));

/// Values given on the command line or in the config file.
/// They win over whatever the page shows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyOverrides {
    pub monthly_standard_minutes: Option<Minutes>,
    pub standard_work_days: Option<u32>,
}

/// Monthly standard working time, e.g. `160:00` -> 9600.
/// An unreadable value still counts as present (0 minutes).
pub fn read_monthly_standard<P: PageReader>(page: &P) -> Option<Minutes> {
    page.info_value(MONTHLY_STANDARD_LABEL).map(time::parse_minutes)
}

/// First number in the standard work days cell, e.g. `20日` -> 20.
pub fn read_standard_work_days<P: PageReader>(page: &P) -> Option<u32> {
    let text = page.info_value(STANDARD_WORK_DAYS_LABEL)?;
    let caps = DIGITS.captures(text)?;
    caps[1].parse().ok()
}

/// Why a policy could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyGap {
    MonthlyStandard,
    WorkDays,
    ZeroWorkDays,
}

impl PolicyGap {
    pub fn message(&self) -> &'static str {
        match self {
            PolicyGap::MonthlyStandard => "Monthly standard working time (月規定労働時間) not found",
            PolicyGap::WorkDays => "Standard work days (所定労働日数) not found",
            PolicyGap::ZeroWorkDays => "Standard work days (所定労働日数) is 0",
        }
    }
}

/// Combine overrides and page values into a usable Policy.
pub fn resolve_policy<P: PageReader>(page: &P, overrides: &PolicyOverrides) -> Result<Policy, PolicyGap> {
    let monthly_standard_minutes = overrides
        .monthly_standard_minutes
        .or_else(|| read_monthly_standard(page))
        .ok_or(PolicyGap::MonthlyStandard)?;

    let standard_work_days = overrides
        .standard_work_days
        .or_else(|| read_standard_work_days(page))
        .ok_or(PolicyGap::WorkDays)?;

    if standard_work_days == 0 {
        return Err(PolicyGap::ZeroWorkDays);
    }

    Ok(Policy {
        monthly_standard_minutes,
        standard_work_days,
    })
}
