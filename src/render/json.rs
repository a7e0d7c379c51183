use crate::core::logic::Report;
use crate::errors::AppResult;

/// Pretty JSON of today, policy, placement and summary.
pub fn render_json(report: &Report) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
