use crate::errors::AppResult;
use crate::models::daily_record::DailyRecord;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use ansi_term::Colour;
use csv::Writer;
use std::path::Path;

fn colour_for_status(status: &str) -> Option<Colour> {
    match status {
        "worked" => Some(Colour::Green),
        "vacation" => Some(Colour::Yellow),
        "error" => Some(Colour::Red),
        "scheduled" => Some(Colour::Blue),
        _ => None,
    }
}

fn flag(b: bool) -> String {
    if b { "x".into() } else { String::new() }
}

/// Per-day table of the classified records.
pub fn render_records(records: &[DailyRecord], color: bool) -> String {
    let mut table = Table::new(vec![
        Column::left("date"),
        Column::left("past"),
        Column::left("shift"),
        Column::left("attend"),
        Column::right("work"),
        Column::left("status"),
    ]);

    for r in records {
        let status = r.status();
        let status = match colour_for_status(status) {
            Some(c) if color => c.paint(status).to_string(),
            _ => status.to_string(),
        };

        table.add_row(vec![
            format!("{:02}/{:02}", r.month, r.day),
            flag(r.is_past_date),
            flag(r.has_shift),
            flag(r.has_attendance),
            format_minutes(r.daily_work_minutes),
            status,
        ]);
    }

    table.render()
}

/// Write the records to a CSV file.
pub fn write_records_csv(path: &Path, records: &[DailyRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "month",
        "day",
        "is_past_date",
        "has_shift",
        "has_attendance",
        "daily_work_minutes",
        "work_time",
        "is_vacation",
        "is_error",
    ])?;

    for r in records {
        wtr.write_record(&[
            r.month.to_string(),
            r.day.to_string(),
            r.is_past_date.to_string(),
            r.has_shift.to_string(),
            r.has_attendance.to_string(),
            r.daily_work_minutes.to_string(),
            format_minutes(r.daily_work_minutes),
            r.is_vacation.to_string(),
            r.is_error.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
