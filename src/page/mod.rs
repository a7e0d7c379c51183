//! Host-page adapter.
//!
//! The attendance book is exported from the rendered page as a snapshot
//! (JSON/YAML) or as a plain CSV of the attendance table. The calculator
//! only ever sees it through the traits in `reader`.

mod csv_rows;
pub mod reader;
pub mod snapshot;

pub use reader::{PageReader, RowReader};
pub use snapshot::{InfoRow, PageSnapshot};

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Label of the info row holding the monthly standard working time.
pub const MONTHLY_STANDARD_LABEL: &str = "月規定労働時間";

/// Label of the info row holding the number of standard work days.
pub const STANDARD_WORK_DAYS_LABEL: &str = "所定労働日数";

/// Load a page snapshot, choosing the decoder from the file extension.
pub fn load_snapshot(path: &Path) -> AppResult<PageSnapshot> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        "yaml" | "yml" => {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        }
        "csv" => csv_rows::read_attendance_csv(path),
        _ => Err(AppError::UnsupportedInput(path.display().to_string())),
    }
}
