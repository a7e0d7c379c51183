//! Time utilities: "H:MM" cell text <-> signed minute counts.

use std::sync::LazyLock;

use regex::Regex;

/// Signed minute count. Negative values show a deficit.
pub type Minutes = i64;

static HOURS_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("valid H:MM pattern"));

/// Returns true for the placeholders Jobcan renders in empty cells.
pub fn is_blank(text: &str) -> bool {
    let t = text.trim();
    t.is_empty() || t == "-"
}

/// Parse the first `H:MM` found in `text` into minutes.
///
/// Blank cells, `-` and text without any `digits:digits` run all yield 0.
/// No sign handling: cells read from the page are never negative.
pub fn parse_minutes(text: &str) -> Minutes {
    if is_blank(text) {
        return 0;
    }

    let Some(caps) = HOURS_MINUTES.captures(text) else {
        return 0;
    };

    // the captures are all digits, so a parse failure can only be overflow
    let hours: Minutes = caps[1].parse().unwrap_or(Minutes::MAX);
    let minutes: Minutes = caps[2].parse().unwrap_or(Minutes::MAX);

    hours.saturating_mul(60).saturating_add(minutes)
}

/// Format minutes as `H:MM`, or `-H:MM` for negative values.
/// Hours are not padded, minutes always use two digits.
pub fn format_minutes(mins: Minutes) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.unsigned_abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

/// Round a fractional minute figure to the nearest whole minute.
/// Halves go towards positive infinity (-2.5 -> -2, 2.5 -> 3).
pub fn round_minutes(mins: f64) -> Minutes {
    let r = mins.round();
    // f64::round sends negative halves away from zero
    let r = if mins - r == 0.5 { r + 1.0 } else { r };
    r as Minutes
}

/// Round then format, used for every fractional figure shown to the user.
pub fn format_fractional(mins: f64) -> String {
    format_minutes(round_minutes(mins))
}
