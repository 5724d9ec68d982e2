mod common;
use common::{full_day, init_db_with_data, rtc, setup_test_db, temp_out};

use chrono::Utc;
use predicates::str::contains;
use rtimecard::export::{build_report, render_pdf, write_csv};
use rtimecard::models::profile::Profile;
use rtimecard::models::settings::UserSettings;
use std::fs;

fn sample_report() -> rtimecard::export::SheetReport {
    let profile = Profile::new("default", "Default");
    let settings = UserSettings {
        employee_name: "João Silva".to_string(),
        employer: "ACME Ltda".to_string(),
        ..UserSettings::default()
    };
    let mut records = full_day(2025, 3, 10, "a");
    records.extend(full_day(2025, 3, 11, "b"));

    build_report(&profile, &settings, &records, 3, 2025, &Utc).expect("build report")
}

// ---------------------------
// Renderers
// ---------------------------

#[test]
fn test_csv_has_bom_header_and_one_line_per_day() {
    let report = sample_report();
    let mut buf = Vec::new();
    write_csv(&mut buf, &report.rows).expect("write csv");

    assert!(buf.starts_with(b"\xEF\xBB\xBF"));

    let text = String::from_utf8(buf[3..].to_vec()).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,Entrada,Saída Almoço,Volta Almoço,Saída,Total Horas");
    assert_eq!(lines.len(), 1 + 31);
    assert_eq!(lines[10], "10/03/2025,09:00,12:00,13:00,18:00,8h 0m");
    assert_eq!(lines[1], "01/03/2025,,,,,0h 0m");
}

#[test]
fn test_report_metadata_and_totals() {
    let report = sample_report();

    assert_eq!(report.period, "Março 2025");
    assert_eq!(report.metadata[0], ("Colaborador".to_string(), "João Silva".to_string()));
    assert!(report.metadata.iter().any(|(k, v)| k == "Empresa" && v == "ACME Ltda"));
    assert!(!report.metadata.iter().any(|(k, _)| k == "Cargo"));

    assert_eq!(report.stats.days_worked_count, 2);
    let totals = report.totals_lines();
    assert!(totals.contains(&"Total trabalhado: 16h 0m".to_string()));
    assert!(totals.contains(&"Saldo: 0h 0m".to_string()));
}

#[test]
fn test_report_rejects_invalid_month() {
    let profile = Profile::new("default", "Default");
    let result = build_report(&profile, &UserSettings::default(), &[], 13, 2025, &Utc);
    assert!(result.is_err());
}

#[test]
fn test_pdf_bytes_are_a_pdf_document() {
    let bytes = render_pdf(&sample_report());
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.len() > 1000);
}

// ---------------------------
// CLI
// ---------------------------

#[test]
fn test_export_csv_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_month", "csv");

    rtc()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--period", "2025-09",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported csv");
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));

    let content = String::from_utf8_lossy(&bytes);
    assert!(content.contains("01/09/2025,09:00,12:00,13:00,18:00,8h 0m"));
    assert!(content.contains("15/09/2025,08:30,,,16:30,8h 0m"));
    assert_eq!(content.lines().count(), 1 + 30);
}

#[test]
fn test_export_json_field_names() {
    let db_path = setup_test_db("export_json_fields");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_fields", "json");

    rtc()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "-p", "09/2025",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let first = &rows[0];

    for field in ["day", "dateFull", "entrada", "almocoSaida", "almocoVolta", "saida", "totalHoras"] {
        assert!(first.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(first["entrada"], "09:00");
    assert_eq!(rows.as_array().map(Vec::len), Some(30));
}

#[test]
fn test_export_pdf_and_xlsx() {
    let db_path = setup_test_db("export_pdf_xlsx");
    init_db_with_data(&db_path);

    for ext in ["pdf", "xlsx"] {
        let out = temp_out(&format!("export_pdf_xlsx_{ext}"), ext);
        rtc()
            .args([
                "--db", &db_path, "export", "--format", ext, "--file", &out, "--period", "2025-09",
            ])
            .assert()
            .success();

        let bytes = fs::read(&out).expect("read exported file");
        match ext {
            "pdf" => assert!(bytes.starts_with(b"%PDF-")),
            _ => assert!(bytes.starts_with(b"PK")),
        }
    }
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rtc()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    rtc()
        .args(["--db", &db_path, "export", "--file", &out, "--period", "2025-09"])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    rtc()
        .args(["--db", &db_path, "export", "--file", &out, "--period", "2025-09", "--force"])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).expect("read"), "old");
}

#[test]
fn test_export_is_logged() {
    let db_path = setup_test_db("export_logged");
    init_db_with_data(&db_path);
    let out = temp_out("export_logged", "csv");

    rtc()
        .args(["--db", &db_path, "export", "--file", &out, "--period", "2025-09"])
        .assert()
        .success();

    rtc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("export"));
}

#[test]
fn test_export_invalid_period() {
    let db_path = setup_test_db("export_bad_period");
    init_db_with_data(&db_path);
    let out = temp_out("export_bad_period", "csv");

    rtc()
        .args(["--db", &db_path, "export", "--file", &out, "--period", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}
