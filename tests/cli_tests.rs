use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};
use std::fs;

mod common;
use common::{OCTOBER_CSV, no_config, october_snapshot_json, rti, temp_out, write_fixture};

#[test]
fn test_calc_table() {
    let cfg = no_config("calc_table");
    let snap = write_fixture("calc_table", "json", &october_snapshot_json());

    rti()
        .args(["--config", &cfg, "calc", &snap, "--today", "10/19"])
        .assert()
        .success()
        .stdout(contains("稼働日数"))
        .stdout(contains("月末残業時間予測"))
        .stdout(contains("8:15"))
        .stdout(contains("0:30"))
        .stdout(contains("-111:00"));
}

#[test]
fn test_calc_json() {
    let cfg = no_config("calc_json");
    let snap = write_fixture("calc_json", "json", &october_snapshot_json());

    let out = rti()
        .args([
            "--config", &cfg, "calc", &snap, "--today", "2025-10-19", "--format", "json",
        ])
        .output()
        .expect("run calc");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json output");
    assert_eq!(v["summary"]["actual_work_days"], 2);
    assert_eq!(v["summary"]["vacation_days"], 1);
    assert_eq!(v["summary"]["error_days"], 1);
    assert_eq!(v["summary"]["total_work_minutes"], 990);
    assert_eq!(v["summary"]["projected_month_end_overtime"], -6660.0);
    assert_eq!(v["policy"]["standard_work_days"], 20);
    assert_eq!(v["placement"]["kind"], "append_to");
    assert_eq!(v["placement"]["id"], "collapseInfo");
}

#[test]
fn test_calc_html_panel() {
    let cfg = no_config("calc_html");
    let snap = write_fixture("calc_html", "json", &october_snapshot_json());

    rti()
        .args([
            "--config", &cfg, "calc", &snap, "--today", "10/19", "--format", "html",
        ])
        .assert()
        .success()
        .stdout(contains(r#"<div id="overtime-calculator-panel""#))
        .stdout(contains(r#"<th scope="row" class="jbc-text-sub">エラー日数</th>"#))
        .stdout(contains(">-111:00</span>"))
        .stdout(contains(">8:15</span>"));
}

#[test]
fn test_calc_csv_needs_policy_flags() {
    let cfg = no_config("calc_csv_nopolicy");
    let snap = write_fixture("calc_csv_nopolicy", "csv", OCTOBER_CSV);

    rti()
        .args(["--config", &cfg, "calc", &snap, "--today", "10/19"])
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(contains("月規定労働時間"));
}

#[test]
fn test_calc_csv_with_policy_flags() {
    let cfg = no_config("calc_csv_policy");
    let snap = write_fixture("calc_csv_policy", "csv", OCTOBER_CSV);

    rti()
        .args([
            "--config", &cfg, "calc", &snap, "--today", "10/19", "--monthly", "160:00", "--days",
            "20", "--format", "html",
        ])
        .assert()
        .success()
        .stdout(contains(">-111:00</span>"));
}

#[test]
fn test_calc_missing_attendance_table_is_a_no_op() {
    let cfg = no_config("calc_no_table");
    let snap = write_fixture(
        "calc_no_table",
        "json",
        r#"{"info": [{"label": "月規定労働時間", "value": "160:00"}, {"label": "所定労働日数", "value": "20日"}]}"#,
    );

    rti()
        .args(["--config", &cfg, "calc", &snap])
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(contains("Attendance table not found"));
}

#[test]
fn test_calc_page_without_table_or_policy_reports_the_table() {
    let cfg = no_config("calc_empty_page");
    let snap = write_fixture(
        "calc_empty_page",
        "json",
        r#"{"url": "https://ssl.jobcan.jp/employee/attendance"}"#,
    );

    rti()
        .args(["--config", &cfg, "calc", &snap])
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(contains("Attendance table not found"))
        .stderr(contains("月規定労働時間").not());
}

#[test]
fn test_calc_invalid_today() {
    let cfg = no_config("calc_bad_today");
    let snap = write_fixture("calc_bad_today", "json", &october_snapshot_json());

    rti()
        .args(["--config", &cfg, "calc", &snap, "--today", "13/45"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_calc_invalid_monthly_flag() {
    let cfg = no_config("calc_bad_monthly");
    let snap = write_fixture("calc_bad_monthly", "json", &october_snapshot_json());

    rti()
        .args(["--config", &cfg, "calc", &snap, "--monthly", "160h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_calc_unsupported_input() {
    let cfg = no_config("calc_txt");
    let snap = write_fixture("calc_txt", "txt", "not a snapshot");

    rti()
        .args(["--config", &cfg, "calc", &snap])
        .assert()
        .failure()
        .stderr(contains("Unsupported input file"));
}

#[test]
fn test_records_table_and_csv() {
    let cfg = no_config("records");
    let snap = write_fixture("records", "json", &october_snapshot_json());

    rti()
        .args(["--config", &cfg, "records", &snap, "--today", "10/19"])
        .assert()
        .success()
        .stdout(contains("10/03"))
        .stdout(contains("vacation"))
        .stdout(contains("error"))
        .stdout(contains("scheduled"));

    let out = temp_out("records", "csv");
    rti()
        .args([
            "--config", &cfg, "records", &snap, "--today", "10/19", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("7 records written"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("month,day,is_past_date"));
    assert!(content.contains("10,1,true,true,true,510,8:30,false,false"));
    assert!(content.contains("10,3,true,true,false,0,0:00,true,false"));
    assert_eq!(content.lines().count(), 8);
}

#[test]
fn test_convert_both_ways() {
    rti()
        .args(["convert", "510"])
        .assert()
        .success()
        .stdout(contains("8:30"));

    rti()
        .args(["convert", "-5"])
        .assert()
        .success()
        .stdout(contains("-0:05"));

    rti()
        .args(["convert", "8:30"])
        .assert()
        .success()
        .stdout(contains("510"));

    rti()
        .args(["convert", "-"])
        .assert()
        .success()
        .stdout(contains("0").and(contains(":").not()));
}

#[test]
fn test_init_and_print_config() {
    let cfg = no_config("init_print");

    rti().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_ok());

    rti()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_format: table"))
        .stdout(contains("panel_container: collapseInfo"));

    fs::remove_file(&cfg).ok();
}

#[test]
fn test_config_print_defaults_and_no_edit_mode() {
    let cfg = no_config("config_defaults");

    rti()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("defaults, file not found"))
        .stdout(contains("color: true"));

    rti()
        .args(["--config", &cfg, "config"])
        .assert()
        .success()
        .stderr(contains("--print"));

    rti()
        .args(["--config", &cfg, "config", "--edit"])
        .assert()
        .failure();
    assert!(fs::metadata(&cfg).is_err());
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = no_config("init_test_mode");

    rti()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success();
    assert!(fs::metadata(&cfg).is_err());
}

#[test]
fn test_config_default_format_is_used() {
    let cfg = write_fixture(
        "config_json_default",
        "conf",
        "default_format: json\ncolor: false\n",
    );
    let snap = write_fixture("config_json_default", "json", &october_snapshot_json());

    rti()
        .args(["--config", &cfg, "calc", &snap, "--today", "10/19"])
        .assert()
        .success()
        .stdout(contains("\"remaining_work_days\": 2"));
}
