use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[test]
fn test_stats_renders_session_overview() {
    let mut cmd = Command::cargo_bin("retrace").unwrap();
    cmd.arg("stats").arg(fixture_path("session.har"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total Requests:   4"))
        .stdout(predicate::str::contains("Avg Latency:      109 ms"));
}

#[test]
fn test_stats_json_output() {
    let mut cmd = Command::cargo_bin("retrace").unwrap();
    cmd.arg("stats")
        .arg(fixture_path("session.har"))
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"total_requests\": 4"))
        .stdout(predicate::str::contains("\"total_bytes\": 510"));
}

#[test]
fn test_list_prints_grouped_entries() {
    let mut cmd = Command::cargo_bin("retrace").unwrap();
    cmd.arg("list").arg(fixture_path("session.har"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("api.example.com"))
        .stdout(predicate::str::contains("unknown host"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("retrace").unwrap();
    cmd.arg("stats").arg("no-such-file.har");

    cmd.assert().failure();
}

#[test]
fn test_malformed_document_fails_without_partial_output() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), r#"{"entries": []}"#).unwrap();

    let mut cmd = Command::cargo_bin("retrace").unwrap();
    cmd.arg("stats").arg(temp.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Not a valid HAR document"));
}

#[test]
fn test_completion_generates_bash_script() {
    let mut cmd = Command::cargo_bin("retrace").unwrap();
    cmd.arg("completion").arg("--shell").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_retrace"));
}
