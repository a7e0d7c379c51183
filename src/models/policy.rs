use crate::utils::time::Minutes;
use serde::Serialize;

/// The two figures the attendance page publishes for the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Policy {
    pub monthly_standard_minutes: Minutes,
    pub standard_work_days: u32,
}

impl Policy {
    /// Expected minutes for one ordinary day. Never truncated.
    pub fn standard_daily_minutes(&self) -> f64 {
        self.monthly_standard_minutes as f64 / self.standard_work_days as f64
    }
}
