use crate::core::calculator::policy::{PolicyOverrides, resolve_policy};
use crate::core::calculator::{analyze, extract};
use crate::models::daily_record::DailyRecord;
use crate::models::placement::Placement;
use crate::models::policy::Policy;
use crate::models::summary::OvertimeSummary;
use crate::models::today::Today;
use crate::page::PageReader;
use crate::ui::messages::{info, warning};
use serde::Serialize;

/// Everything one run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub today: Today,
    pub policy: Policy,
    pub placement: Placement,
    pub summary: OvertimeSummary,
    #[serde(skip)]
    pub records: Vec<DailyRecord>,
}

pub struct Core;

impl Core {
    /// Read the page and compute everything from scratch.
    ///
    /// Returns None when the page is not ready for a calculation (no
    /// attendance table, then missing policy figures). Nothing is kept between runs.
    pub fn recompute<P: PageReader>(
        page: &P,
        today: Today,
        overrides: &PolicyOverrides,
        container_id: &str,
    ) -> Option<Report> {
        let Some(rows) = page.attendance_rows() else {
            info("Attendance table not found, nothing to calculate.");
            return None;
        };

        let policy = match resolve_policy(page, overrides) {
            Ok(p) => p,
            Err(gap) => {
                warning(gap.message());
                return None;
            }
        };

        let records = extract::extract(rows, today);
        let summary = analyze::analyze(
            &records,
            policy.standard_daily_minutes(),
            policy.monthly_standard_minutes,
        );

        Some(Report {
            today,
            policy,
            placement: Placement::for_page(page, container_id),
            summary,
            records,
        })
    }
}
