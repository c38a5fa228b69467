mod common;
use common::sample_records;

use std::env;
use std::fs;
use std::path::PathBuf;

use wfotracker::export::export_roster_xlsx;

/// Create a temporary output file path inside tempdir and ensure it's removed
fn temp_out(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wfotracker_out.xlsx", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn export_writes_a_workbook() {
    let out = temp_out("export_writes_a_workbook");
    export_roster_xlsx(&sample_records(), &out, false).expect("export xlsx");

    let meta = fs::metadata(&out).expect("exported file exists");
    assert!(meta.len() > 0);
}

#[test]
fn export_empty_roster_writes_placeholder_sheet() {
    let out = temp_out("export_empty_roster");
    export_roster_xlsx(&[], &out, false).expect("export empty xlsx");

    assert!(out.exists());
}

#[test]
fn export_force_overwrites_existing_file() {
    let out = temp_out("export_force_overwrites");
    fs::write(&out, b"stale").expect("seed file");

    export_roster_xlsx(&sample_records(), &out, true).expect("forced export");

    // the stale placeholder was replaced by a real workbook
    let meta = fs::metadata(&out).expect("exported file exists");
    assert!(meta.len() > 5);
}
