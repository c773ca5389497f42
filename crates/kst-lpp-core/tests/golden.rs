use std::fs;
use std::path::{Path, PathBuf};

use kst_lpp_core::{DecodeOptions, DecodeReport, Outcome, decode_report};

fn case_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_expected_report(dir: &str) -> DecodeReport {
    let expected_path = case_dir(dir).join("expected_report.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let payload = fs::read_to_string(case_dir(dir).join("input.hex")).expect("read input.hex");
    let expected = load_expected_report(dir);

    let mut actual = decode_report(payload.trim(), &DecodeOptions::default());
    actual.tool.version = expected.tool.version.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_distance() {
    run_golden("tests/golden/distance");
}

#[test]
fn golden_battery() {
    run_golden("tests/golden/battery");
}

#[test]
fn golden_accelerometer() {
    run_golden("tests/golden/accelerometer");
}

#[test]
fn golden_gps_standard() {
    run_golden("tests/golden/gps_standard");
}

#[test]
fn golden_gps_extended() {
    run_golden("tests/golden/gps_extended");
}

#[test]
fn golden_unknown_type() {
    run_golden("tests/golden/unknown_type");
}

#[test]
fn golden_gps_unsupported_length() {
    run_golden("tests/golden/gps_unsupported_length");
}

#[test]
fn golden_odd_length() {
    run_golden("tests/golden/odd_length");
}

#[test]
fn golden_odd_length_has_no_header() {
    let report = load_expected_report("tests/golden/odd_length");
    assert!(report.header.is_none());
    assert!(matches!(report.result, Outcome::Failed(_)));
}

#[test]
fn golden_gps_extended_has_accuracy() {
    let report = load_expected_report("tests/golden/gps_extended");
    let value = serde_json::to_value(&report.result).expect("result json");
    assert_eq!(value["sat"], 4);
    assert_eq!(value["hacc"], 101.76);
}
