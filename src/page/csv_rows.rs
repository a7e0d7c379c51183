use super::snapshot::PageSnapshot;
use crate::errors::AppResult;
use csv::ReaderBuilder;
use std::path::Path;

/// Read a CSV copy of the attendance table.
///
/// No header row, one line per day, any number of columns. The result has
/// no info rows, so policy figures must come from flags or config.
pub(crate) fn read_attendance_csv(path: &Path) -> AppResult<PageSnapshot> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        rows.push(rec.iter().map(str::to_string).collect::<Vec<_>>());
    }

    Ok(PageSnapshot {
        attendance: Some(rows),
        ..Default::default()
    })
}
