#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{FixedOffset, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

use rtimecard::models::punch::PunchRecord;
use rtimecard::models::punch_kind::PunchKind;

/// Binary under test, isolated from the user's configuration directory.
pub fn rtc() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimecard");
    cmd.env("RTIMECARD_HOME", env::temp_dir().join("rtimecard_tests_home"));
    cmd.env_remove("RTIMECARD_API_KEY");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add two complete days in September 2025
pub fn init_db_with_data(db_path: &str) {
    rtc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (date, time, kind) in [
        ("2025-09-01", "09:00", "entry"),
        ("2025-09-01", "12:00", "break-start"),
        ("2025-09-01", "13:00", "break-end"),
        ("2025-09-01", "18:00", "exit"),
        ("2025-09-15", "08:30", "entry"),
        ("2025-09-15", "16:30", "exit"),
    ] {
        rtc()
            .args(["--db", db_path, "add", date, time, kind])
            .assert()
            .success();
    }
}

/// Epoch ms of a UTC wall clock.
pub fn utc_ms(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid utc datetime")
        .timestamp_millis()
}

/// Epoch ms of a wall clock in a fixed offset, in hours east of UTC.
pub fn offset_ms(offset_hours: i32, y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    FixedOffset::east_opt(offset_hours * 3600)
        .expect("valid offset")
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid local datetime")
        .timestamp_millis()
}

pub fn rec(id: &str, ts: i64, kind: PunchKind) -> PunchRecord {
    PunchRecord::new(id, ts, kind)
}

/// A regular day in UTC: entry, lunch break, exit.
pub fn full_day(y: i32, m: u32, d: u32, tag: &str) -> Vec<PunchRecord> {
    vec![
        rec(&format!("{tag}-1"), utc_ms(y, m, d, 9, 0), PunchKind::Entry),
        rec(&format!("{tag}-2"), utc_ms(y, m, d, 12, 0), PunchKind::BreakStart),
        rec(&format!("{tag}-3"), utc_ms(y, m, d, 13, 0), PunchKind::BreakEnd),
        rec(&format!("{tag}-4"), utc_ms(y, m, d, 18, 0), PunchKind::Exit),
    ]
}
