//! Turns raw attendance-table rows into classified DailyRecords.

use crate::models::daily_record::DailyRecord;
use crate::models::today::Today;
use crate::page::RowReader;
use crate::utils::time::{self, Minutes};
use regex::Regex;
use std::sync::LazyLock;

/// Text Jobcan shows in the clock-out and work-time cells while the day is
/// still in progress.
pub const WORKING_SENTINEL: &str = "(勤務中)";

/// Date, holiday flag, shift, clock-in, clock-out, work time.
pub const MIN_CELLS: usize = 6;

const COL_DATE: usize = 0;
const COL_SHIFT: usize = 2;
const COL_CLOCK_IN: usize = 3;
const COL_CLOCK_OUT: usize = 4;
const COL_WORK_TIME: usize = 5;

static MONTH_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+)").expect("valid M/D pattern"));

/// Classify every row of the attendance table.
///
/// Rows with fewer than `MIN_CELLS` cells are skipped. Every other row yields
/// exactly one record, even when its date label cannot be read.
///
/// No policy figure is taken: classification does not depend on the standard
/// daily minutes, which only `analyze` needs.
pub fn extract<R: RowReader>(rows: &[R], today: Today) -> Vec<DailyRecord> {
    rows.iter()
        .filter(|row| row.cell_count() >= MIN_CELLS)
        .map(|row| extract_row(row, today))
        .collect()
}

fn extract_row<R: RowReader + ?Sized>(row: &R, today: Today) -> DailyRecord {
    let (month, day) = parse_month_day(row.text(COL_DATE)).unwrap_or((today.month, 0));

    let shift = row.text(COL_SHIFT);
    let clock_in = row.text(COL_CLOCK_IN);
    let clock_out = row.text(COL_CLOCK_OUT);
    let work_time = row.text(COL_WORK_TIME);

    let has_shift = !time::is_blank(shift);

    // the in-progress sentinel only ever shows up on the clock-out side
    let has_attendance =
        !time::is_blank(clock_in) || (!time::is_blank(clock_out) && clock_out != WORKING_SENTINEL);

    let daily_work_minutes: Minutes = if work_time == WORKING_SENTINEL {
        0
    } else {
        time::parse_minutes(work_time)
    };

    let is_past_date = today.is_after(month, day);

    DailyRecord::new(
        month,
        day,
        is_past_date,
        has_shift,
        has_attendance,
        daily_work_minutes,
    )
}

/// First `M/D` in the date label, e.g. `10/01(水)` -> (10, 1).
fn parse_month_day(label: &str) -> Option<(u32, u32)> {
    let caps = MONTH_DAY.captures(label)?;
    let month = caps[1].parse().ok()?;
    let day = caps[2].parse().ok()?;
    Some((month, day))
}
