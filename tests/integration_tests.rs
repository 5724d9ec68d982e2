use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rtc, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_db");

    rtc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_month_view_shows_rows_and_totals() {
    let db_path = setup_test_db("month_view");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "month", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Setembro 2025"))
        .stdout(contains("01/09/2025"))
        .stdout(contains("30/09/2025"))
        .stdout(contains("Days worked: 2"))
        .stdout(contains("Worked: 16h 0m"))
        .stdout(contains("Break: 1h 0m"));
}

#[test]
fn test_month_balance_follows_workload() {
    let db_path = setup_test_db("month_workload");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "settings", "--workload", "7h30m"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "month", "-p", "2025-09"])
        .assert()
        .success()
        .stdout(contains("+1h 0m"));
}

#[test]
fn test_list_shows_punches_of_month() {
    let db_path = setup_test_db("list_month");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("BREAK_START"))
        .stdout(contains("15/09/2025"))
        .stdout(contains("16:30"));

    rtc()
        .args(["--db", &db_path, "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("No punches recorded."));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("add_invalid");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "add", "2025-02-30", "09:00", "entry"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rtc()
        .args(["--db", &db_path, "add", "2025-09-02", "9h", "entry"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    rtc()
        .args(["--db", &db_path, "add", "2025-09-02", "09:00", "coffee"])
        .assert()
        .failure()
        .stderr(contains("Invalid punch kind"));
}

#[test]
fn test_punch_now_and_status() {
    let db_path = setup_test_db("punch_status");

    rtc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "punch", "--note", "first"])
        .assert()
        .success()
        .stdout(contains("Entry"));

    rtc()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("first"))
        .stdout(contains("Next punch: Break start"));
}

#[test]
fn test_clear_with_force() {
    let db_path = setup_test_db("clear_force");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "clear", "--force"])
        .assert()
        .success()
        .stdout(contains("6 punches deleted"));

    rtc()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("No punches recorded."));
}

#[test]
fn test_clear_cancelled_keeps_records() {
    let db_path = setup_test_db("clear_cancel");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    rtc()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("ENTRY"));
}

#[test]
fn test_profiles_are_isolated() {
    let db_path = setup_test_db("profiles_isolated");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "profile", "create", "Side Job"])
        .assert()
        .success()
        .stdout(contains("side-job"));

    rtc()
        .args(["--db", &db_path, "--profile", "side-job", "add", "2025-09-03", "10:00", "in"])
        .assert()
        .success();

    // the active profile is still the default one
    rtc()
        .args(["--db", &db_path, "month", "-p", "2025-09"])
        .assert()
        .success()
        .stdout(contains("profile: Default"))
        .stdout(contains("03/09/2025 10:00").not());

    rtc()
        .args(["--db", &db_path, "profile", "switch", "Side Job"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "profile", "show"])
        .assert()
        .success()
        .stdout(contains("Side Job"));

    rtc()
        .args(["--db", &db_path, "list", "-p", "2025-09"])
        .assert()
        .success()
        .stdout(contains("03/09/2025"))
        .stdout(contains("01/09/2025").not());

    rtc()
        .args(["--db", &db_path, "profile", "list"])
        .assert()
        .success()
        .stdout(contains("default"))
        .stdout(contains("side-job"));
}

#[test]
fn test_unknown_profile_fails() {
    let db_path = setup_test_db("profile_unknown");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "profile", "switch", "ghost"])
        .assert()
        .failure()
        .stderr(contains("Profile not found"));
}

#[test]
fn test_settings_update_and_print() {
    let db_path = setup_test_db("settings_update");
    init_db_with_data(&db_path);

    rtc()
        .args([
            "--db",
            &db_path,
            "settings",
            "--name",
            "Maria",
            "--employer",
            "ACME",
            "--remind-entry",
            "9:05",
        ])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "settings", "--print"])
        .assert()
        .success()
        .stdout(contains("employee_name: Maria"))
        .stdout(contains("employer: ACME"))
        .stdout(contains("09:05"))
        .stdout(contains("daily_workload_minutes: 480"));

    rtc()
        .args(["--db", &db_path, "settings", "--remind-entry", "off"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("09:05").not());
}

#[test]
fn test_settings_rejects_bad_values() {
    let db_path = setup_test_db("settings_bad");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "settings", "--workload", "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid workload"));

    for workload in ["99999999:00", "99999999h", "7h90m", "25h"] {
        rtc()
            .args(["--db", &db_path, "settings", "--workload", workload])
            .assert()
            .failure()
            .stderr(contains("Invalid workload"));
    }

    rtc()
        .args(["--db", &db_path, "settings", "--remind-exit", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn test_summary_without_api_key_prints_fallback() {
    let db_path = setup_test_db("summary_fallback");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "summary", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Summary unavailable right now. Please try again later."));
}

#[test]
fn test_remind_runs() {
    let db_path = setup_test_db("remind_runs");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "remind"])
        .assert()
        .success()
        .stdout(contains("No reminders due."));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("nested").join("copy.sqlite");

    rtc()
        .args(["--db", &db_path, "backup", "--file"])
        .arg(&out)
        .arg("--compress")
        .assert()
        .success();

    let bytes = fs::read(out.with_extension("zip")).expect("read backup zip");
    assert!(bytes.starts_with(b"PK"));
    assert!(!out.exists());
}

#[test]
fn test_backup_plain_copy() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);
    let out = temp_out("backup_plain", "sqlite");

    rtc()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();

    assert_eq!(
        fs::metadata(&out).expect("backup exists").len(),
        fs::metadata(&db_path).expect("db exists").len()
    );
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_mutations");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}
