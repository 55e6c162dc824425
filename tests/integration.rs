// Integration tests for the helium CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the helium binary.
fn helium() -> Command {
    Command::cargo_bin("helium").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    helium()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("helium"));
}

#[test]
fn cli_help_flag() {
    helium()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code quality report"));
}

#[test]
fn report_requires_metric_inputs() {
    helium()
        .args(["report", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn init_requires_path() {
    helium()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn no_render_requires_svg_output() {
    helium()
        .args(["report", ".", "--mi", "mi.json", "--cc", "cc.json", "--no-render"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--svg-output"));
}

#[test]
fn verbose_and_quiet_conflict() {
    helium()
        .args(["-v", "-q", "template"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn template_prints_builtin_svg() {
    helium()
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("<svg"))
        .stdout(predicate::str::contains("{{ proj_name }}"));
}
