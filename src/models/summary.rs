use crate::utils::time::Minutes;
use serde::Serialize;

/// Month-to-date aggregate of a set of DailyRecords.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OvertimeSummary {
    pub total_work_minutes: Minutes,
    pub actual_work_days: u32,
    pub vacation_days: u32,
    pub error_days: u32,
    pub current_overtime: f64,
    pub remaining_work_days: u32,
    pub average_daily_minutes: f64,
    pub projected_month_end_overtime: f64,
    pub monthly_standard_minutes: Minutes,
}
