//! Aggregates DailyRecords into the month's overtime figures.

use crate::models::daily_record::DailyRecord;
use crate::models::summary::OvertimeSummary;
use crate::utils::time::Minutes;

/// Single pass over `records`; the order of records does not matter.
///
/// Past days feed the worked/vacation/error counters, future days with a
/// shift count as remaining work days. All derived figures use real division.
pub fn analyze(
    records: &[DailyRecord],
    standard_daily_minutes: f64,
    monthly_standard_minutes: Minutes,
) -> OvertimeSummary {
    let mut total_work_minutes: Minutes = 0;
    let mut actual_work_days = 0u32;
    let mut vacation_days = 0u32;
    let mut error_days = 0u32;
    let mut remaining_work_days = 0u32;

    for r in records {
        if r.is_past_date {
            if r.daily_work_minutes > 0 {
                total_work_minutes = total_work_minutes.saturating_add(r.daily_work_minutes);
                actual_work_days += 1;
            }
            if r.is_vacation {
                vacation_days += 1;
            }
            if r.is_error {
                error_days += 1;
            }
        } else if r.has_shift {
            remaining_work_days += 1;
        }
    }

    let total = total_work_minutes as f64;

    // vacation and error days are not expected to be worked
    let adjusted_monthly_standard =
        monthly_standard_minutes as f64 - standard_daily_minutes * f64::from(vacation_days + error_days);

    let current_overtime = total - standard_daily_minutes * f64::from(actual_work_days);

    let average_daily_minutes = if actual_work_days > 0 {
        total / f64::from(actual_work_days)
    } else {
        0.0
    };

    let projected_total = total + average_daily_minutes * f64::from(remaining_work_days);
    let projected_month_end_overtime = projected_total - adjusted_monthly_standard;

    OvertimeSummary {
        total_work_minutes,
        actual_work_days,
        vacation_days,
        error_days,
        current_overtime,
        remaining_work_days,
        average_daily_minutes,
        projected_month_end_overtime,
        monthly_standard_minutes,
    }
}
