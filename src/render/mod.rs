//! Output of a calculation: Jobcan panel markup, terminal tables, JSON, CSV.

mod fs_utils;
pub mod json;
pub mod panel;
pub mod records;
pub mod text;

pub use fs_utils::ensure_writable;

use crate::models::summary::OvertimeSummary;
use crate::utils::time::{format_fractional, round_minutes};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Html,
}

/// A value shown in the summary panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Days(u32),
    Time(f64),
    /// A time that is colored by its sign on the terminal.
    Overtime(f64),
}

impl Figure {
    pub fn display(&self) -> String {
        match self {
            Figure::Days(n) => n.to_string(),
            Figure::Time(m) | Figure::Overtime(m) => format_fractional(*m),
        }
    }

    pub fn rounded_minutes(&self) -> Option<i64> {
        match self {
            Figure::Days(_) => None,
            Figure::Time(m) | Figure::Overtime(m) => Some(round_minutes(*m)),
        }
    }
}

/// The seven labeled figures of the panel, in display order.
pub fn figures(s: &OvertimeSummary) -> [(&'static str, Figure); 7] {
    [
        ("稼働日数", Figure::Days(s.actual_work_days)),
        ("休暇日数", Figure::Days(s.vacation_days)),
        ("エラー日数", Figure::Days(s.error_days)),
        ("平均労働時間/日", Figure::Time(s.average_daily_minutes)),
        ("昨日までの残業時間", Figure::Overtime(s.current_overtime)),
        ("残り営業日数", Figure::Days(s.remaining_work_days)),
        ("月末残業時間予測", Figure::Overtime(s.projected_month_end_overtime)),
    ]
}
