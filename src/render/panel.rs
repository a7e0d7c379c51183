//! Summary panel in the attendance page's own card markup.

use super::figures;
use crate::models::summary::OvertimeSummary;

/// Id of the panel element. A new panel replaces any element with this id.
pub const PANEL_ID: &str = "overtime-calculator-panel";

pub fn render_panel(summary: &OvertimeSummary) -> String {
    let rows: String = figures(summary)
        .iter()
        .map(|(label, fig)| render_row(label, &fig.display()))
        .collect();

    format!(
        r#"<div id="{id}" class="col-lg-6 mb-3">
    <div class="card jbc-card-bordered h-100">
        <div class="card-header jbc-card-header">
            <h5 class="card-text">残業時間分析</h5>
        </div>
        <div class="card-body">
            <table class="table jbc-table jbc-table-fixed info-contents">
                <tbody>
{rows}                </tbody>
            </table>
        </div>
    </div>
</div>
"#,
        id = PANEL_ID,
        rows = rows,
    )
}

fn render_row(label: &str, value: &str) -> String {
    format!(
        r#"                    <tr>
                        <th scope="row" class="jbc-text-sub">{label}</th>
                        <td><span class="info-content text-right text-nowrap d-inline-block" style="width: 42px;">{value}</span></td>
                    </tr>
"#
    )
}
