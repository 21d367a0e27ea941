//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn seriecalc() -> Command {
    Command::cargo_bin("seriecalc").expect("binary not found")
}

#[test]
fn help_flag() {
    seriecalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("series"));
}

#[test]
fn version_flag() {
    seriecalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seriecalc"));
}

#[test]
fn default_run_reports_comparison() {
    seriecalc()
        .assert()
        .success()
        .stdout(predicate::str::contains("|S - y|"))
        .stdout(predicate::str::contains("Precision achieved"));
}

#[test]
fn quiet_mode_prints_bare_sum() {
    seriecalc()
        .args(["--strategy", "strided", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3465735"));
}

#[test]
fn quiet_mode_prints_one_sum_across_all_strategies() {
    seriecalc()
        .args(["--strategy", "all", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\A0\.3465735\d+\n\z").unwrap());
}

#[test]
fn single_worker_matches_default() {
    seriecalc()
        .args(["--strategy", "strided", "-w", "1", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3465735"));
}

#[test]
fn chunked_strategy_runs() {
    seriecalc()
        .args(["--strategy", "chunked", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3465735"));
}

#[test]
fn details_mode_shows_formula() {
    seriecalc()
        .args(["--strategy", "strided", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2n-1"));
}

#[test]
fn out_of_domain_x_fails() {
    seriecalc()
        .args(["--x", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("diverges"));
}

#[test]
fn non_positive_epsilon_fails_fast() {
    seriecalc()
        .args(["--epsilon", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("epsilon"));
}

#[test]
fn zero_workers_fails_fast() {
    seriecalc()
        .args(["-w", "0", "--strategy", "strided"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("worker"));
}

#[test]
fn unknown_strategy_fails() {
    seriecalc()
        .args(["--strategy", "mystery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn json_report_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    seriecalc()
        .args(["-o", path.to_str().unwrap(), "-q"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(report["workers"], 4);
    assert_eq!(report["strategies"].as_array().unwrap().len(), 2);
    for strategy in report["strategies"].as_array().unwrap() {
        assert_eq!(strategy["converged"], true);
    }
}

#[test]
fn completion_generates_script() {
    seriecalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seriecalc"));
}
