use crate::utils::time::Minutes;
use serde::Serialize;

/// One calendar day of the attendance book, classified.
///
/// Built fresh on every extraction pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub month: u32,
    pub day: u32,
    pub is_past_date: bool,
    pub has_shift: bool,
    pub has_attendance: bool,
    pub daily_work_minutes: Minutes,
    pub is_vacation: bool,
    pub is_error: bool,
}

impl DailyRecord {
    /// Build a record from the four primary facts and derive the rest.
    pub fn new(
        month: u32,
        day: u32,
        is_past_date: bool,
        has_shift: bool,
        has_attendance: bool,
        daily_work_minutes: Minutes,
    ) -> Self {
        let is_vacation = is_past_date && has_shift && !has_attendance;
        let is_error = is_past_date && has_shift && has_attendance && daily_work_minutes == 0;

        Self {
            month,
            day,
            is_past_date,
            has_shift,
            has_attendance,
            daily_work_minutes,
            is_vacation,
            is_error,
        }
    }

    /// Short label for tables and CSV output.
    pub fn status(&self) -> &'static str {
        if self.is_vacation {
            "vacation"
        } else if self.is_error {
            "error"
        } else if self.is_past_date && self.daily_work_minutes > 0 {
            "worked"
        } else if !self.is_past_date && self.has_shift {
            "scheduled"
        } else {
            "-"
        }
    }
}
