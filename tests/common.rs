#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Path of a config file that does not exist, so every run uses defaults
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime_missing.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh file in tempdir and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rovertime_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

/// Attendance rows of a small October book, evaluated on 10/19:
/// two worked days (8:30 + 8:00), one vacation, one error day,
/// a weekend, today (still working) and one future shift.
pub const OCTOBER_ROWS: &str = r#"[
    ["10/01(水)", "", "09:00-18:00", "09:00", "18:30", "8:30", "0:30", "0:00", "1:00", "0:00", ""],
    ["10/02(木)", "", "09:00-18:00", "09:00", "18:00", "8:00", "0:00", "0:00", "1:00", "0:00", ""],
    ["10/03(金)", "", "09:00-18:00", "-", "-", "-", "-", "-", "-", "8:00", "有休"],
    ["10/04(土)", "法定休日", "-", "-", "-", "-", "-", "-", "-", "-", ""],
    ["10/06(月)", "", "09:00-18:00", "09:10", "-", "-", "-", "-", "-", "-", ""],
    ["10/19(日)", "", "09:00-18:00", "09:00", "(勤務中)", "(勤務中)", "-", "-", "-", "-", ""],
    ["10/20(月)", "", "09:00-18:00", "", "", "", "", "", "", "", ""],
    ["合計"]
]"#;

pub fn october_snapshot_json() -> String {
    format!(
        r#"{{
  "url": "https://ssl.jobcan.jp/employee/attendance",
  "info": [
    {{ "label": "月規定労働時間", "value": "160:00" }},
    {{ "label": "所定労働日数", "value": "20日" }}
  ],
  "attendance": {rows},
  "containers": ["collapseInfo"]
}}"#,
        rows = OCTOBER_ROWS
    )
}

pub const OCTOBER_CSV: &str = "\
10/01(水),,09:00-18:00,09:00,18:30,8:30
10/02(木),,09:00-18:00,09:00,18:00,8:00
10/03(金),,09:00-18:00,-,-,-
10/04(土),法定休日,-,-,-,-
10/06(月),,09:00-18:00,09:10,-,-
10/19(日),,09:00-18:00,09:00,(勤務中),(勤務中)
10/20(月),,09:00-18:00,,,
合計
";
