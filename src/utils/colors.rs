/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Overtime color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_overtime(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// Wrap `value` in the overtime color for `minutes`.
pub fn colorize_overtime(value: &str, minutes: i64) -> String {
    format!("{}{value}{RESET}", color_for_overtime(minutes))
}

/// Grey out zero counts and `0:00` times.
pub fn colorize_optional(value: &str) -> String {
    if value.trim() == "0" || value.trim() == "0:00" || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
