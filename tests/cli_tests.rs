use assert_cmd::{Command, cargo_bin_cmd};
use predicates::str::contains;
use std::env;
use std::path::PathBuf;

/// Binary under test, pointed at an unreachable store and an isolated
/// home so no real config file or server is touched.
fn wft() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("wfotracker_cli_tests_home");
    std::fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("wfotracker");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--server", "http://127.0.0.1:9"]);
    cmd
}

#[test]
fn help_lists_both_flows() {
    wft()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("list"))
        .stdout(contains("forecast"))
        .stdout(contains("apply"))
        .stdout(contains("export"));
}

#[test]
fn apply_rejects_invalid_month_before_any_request() {
    wft()
        .args(["apply", "--month", "2024-13", "--days", "mon", "--dry-run"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn apply_rejects_unknown_weekday_names() {
    wft()
        .args(["apply", "--month", "2024-02", "--days", "funday", "--dry-run"])
        .assert()
        .failure()
        .stderr(contains("Invalid weekday"));
}

#[test]
fn list_reports_store_failure_without_retrying() {
    // nothing listens on port 9; the failure surfaces once and the
    // command exits non-zero
    wft()
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}

#[test]
fn mark_requires_the_day_argument() {
    wft()
        .args(["mark", "--month", "2024-02"])
        .assert()
        .failure();
}
