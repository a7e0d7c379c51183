use super::{Figure, figures};
use crate::core::logic::Report;
use crate::utils::colors::{colorize_optional, colorize_overtime};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

/// Terminal rendering of a report: the policy line and the seven figures.
pub fn render_summary(report: &Report, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Today {}/{} | 月規定労働時間 {} | 所定労働日数 {} | 1日 {:.1} min\n\n",
        report.today.month,
        report.today.day,
        format_minutes(report.policy.monthly_standard_minutes),
        report.policy.standard_work_days,
        report.policy.standard_daily_minutes(),
    ));

    let mut table = Table::new(vec![Column::left("item"), Column::right("value")]).without_header();

    for (label, fig) in figures(&report.summary) {
        let shown = fig.display();
        let value = match (color, fig) {
            (false, _) => shown,
            (true, Figure::Overtime(_)) => {
                colorize_overtime(&shown, fig.rounded_minutes().unwrap_or(0))
            }
            (true, _) => colorize_optional(&shown),
        };
        table.add_row(vec![label.to_string(), value]);
    }

    out.push_str(&table.render());
    out.push_str(&format!("\nPanel: {}\n", report.placement.describe()));
    out
}
