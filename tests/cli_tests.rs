mod common;
use common::{rts, sample_json, start_server};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_pivot_from_file_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entries.json");
    fs::write(&input, sample_json()).unwrap();
    let out = dir.path().join("out");

    rts(dir.path())
        .args(["pivot", "--input"])
        .arg(&input)
        .args(["--file", "timesheet", "--out-dir"])
        .arg(&out)
        .assert()
        .success()
        .stderr(contains("CSV export completed"));

    let bytes = fs::read(out.join("timesheet.csv")).expect("exported csv");
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8_lossy(&bytes[3..]).to_string();
    assert!(text.contains("project\t2020-01-01\t2020-01-02"));
    assert!(text.contains("total\t4\t2"));
}

#[test]
fn test_pivot_to_stdout_in_json_with_preview() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entries.json");
    fs::write(&input, sample_json()).unwrap();

    rts(dir.path())
        .args(["pivot", "--format", "json", "--stdout", "--preview", "--file", "x", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("\"project\": \"total\""))
        .stderr(contains("2020-01-01"));
}

#[test]
fn test_pivot_with_invalid_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entries.json");
    fs::write(&input, "[{\"hours\": \"x\"}]").unwrap();

    rts(dir.path())
        .args(["pivot", "--stdout", "--file", "x", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Invalid time entries"));
}

#[test]
fn test_pivot_requires_a_source() {
    let dir = tempfile::tempdir().unwrap();
    rts(dir.path())
        .args(["pivot", "--file", "x"])
        .assert()
        .failure();
}

#[test]
fn test_pivot_input_rejects_request_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entries.json");
    fs::write(&input, sample_json()).unwrap();

    rts(dir.path())
        .args(["pivot", "--stdout", "--file", "x", "--payload", "1,a,b", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));

    rts(dir.path())
        .args(["pivot", "--stdout", "--file", "x", "--employee", "1"])
        .args(["--from", "2020-01-01", "--to", "2020-01-31", "--input"])
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn test_fetch_saves_body_verbatim() {
    let server = start_server(200, "text/csv", b"col1\tcol2\n1\t2\n");
    let dir = tempfile::tempdir().unwrap();

    rts(dir.path())
        .args(["--token", "secret", "--api-uri", &server.base])
        .args(["fetch", "reports/3", "--file", "report.csv", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(contains("Download completed"));

    assert_eq!(
        fs::read(dir.path().join("report.csv")).unwrap(),
        b"col1\tcol2\n1\t2\n"
    );
    let req = server.last_request();
    assert_eq!(req.path, "/reports/3");
    assert_eq!(req.header("authorization"), Some("Bearer secret"));
}

#[test]
fn test_fetch_legacy_payload_posts_json() {
    let server = start_server(200, "application/octet-stream", b"xlsx-bytes");
    let dir = tempfile::tempdir().unwrap();

    rts(dir.path())
        .env("RTIMESHEET_TOKEN", "env-token")
        .args(["fetch", &server.url("/report"), "--payload", "12,2020-01-01,2020-01-31"])
        .args(["--file", "r.xlsx", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let req = server.last_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.header("authorization"), Some("Bearer env-token"));
    let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
    assert_eq!(body["employee_id"], 12);
}

#[test]
fn test_fetch_rejected_creates_no_file() {
    let server = start_server(403, "application/json", br#"{"error":"forbidden"}"#);
    let dir = tempfile::tempdir().unwrap();

    rts(dir.path())
        .args(["--token", "t", "fetch", &server.url("/report"), "--file", "r.csv", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("403"))
        .stderr(contains("forbidden"));

    assert!(!dir.path().join("r.csv").exists());
}

#[test]
fn test_fetch_without_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    rts(dir.path())
        .args(["fetch", "http://127.0.0.1:9/report", "--file", "r.csv", "--stdout"])
        .assert()
        .failure()
        .stderr(contains("Missing API token"));
}

#[test]
fn test_fetch_with_bad_payload_fails() {
    let dir = tempfile::tempdir().unwrap();
    rts(dir.path())
        .args(["--token", "t", "fetch", "http://127.0.0.1:9/r", "--payload", "abc"])
        .args(["--file", "r.csv", "--stdout"])
        .assert()
        .failure()
        .stderr(contains("Invalid request payload"));
}

#[test]
fn test_existing_file_is_kept_without_force() {
    let server = start_server(200, "text/csv", b"new");
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("r.csv"), b"old").unwrap();

    rts(dir.path())
        .args(["--token", "t", "fetch", &server.url("/r"), "--file", "r.csv", "--out-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read(dir.path().join("r.csv")).unwrap(), b"old");

    rts(dir.path())
        .args(["--token", "t", "fetch", &server.url("/r"), "--file", "r.csv", "--out-dir"])
        .arg(dir.path())
        .write_stdin("y\n")
        .assert()
        .success();
    assert_eq!(fs::read(dir.path().join("r.csv")).unwrap(), b"new");
}

#[test]
fn test_config_file_values_are_used() {
    let server = start_server(200, "text/csv", b"from-config");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("exports");
    fs::write(
        dir.path().join("rtimesheet.conf"),
        format!(
            "api_uri: {}\ntoken: file-token\noutput_dir: {}\n",
            server.base,
            out.display()
        ),
    )
    .unwrap();

    rts(dir.path())
        .args(["fetch", "r", "--file", "r.csv"])
        .assert()
        .success();

    assert_eq!(fs::read(out.join("r.csv")).unwrap(), b"from-config");
    assert_eq!(
        server.last_request().header("authorization"),
        Some("Bearer file-token")
    );
}

#[test]
fn test_config_init_and_print_masks_token() {
    let dir = tempfile::tempdir().unwrap();

    rts(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stderr(contains("Config file created"));
    assert!(dir.path().join("rtimesheet.conf").exists());

    rts(dir.path())
        .args(["--token", "secret123456", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("3456"))
        .stdout(contains("secret123456").not());
}

#[test]
fn test_broken_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rtimesheet.conf"), "api_uri: [unclosed\n").unwrap();

    rts(dir.path())
        .args(["config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}
