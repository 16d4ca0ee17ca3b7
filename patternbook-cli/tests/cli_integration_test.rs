//! Integration tests for the CLI command surface

use assert_cmd::Command;
use predicates::prelude::*;

fn patternbook() -> Command {
    Command::cargo_bin("patternbook").expect("binary builds")
}

#[test]
fn no_arguments_prints_help() {
    patternbook()
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn list_shows_every_pattern_id() {
    patternbook()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("builder-pattern"))
        .stdout(predicate::str::contains("container-presentational"))
        .stdout(predicate::str::contains("custom-hook"));
}

#[test]
fn list_json_is_parseable() {
    let output = patternbook()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let patterns: serde_json::Value =
        serde_json::from_slice(&output).expect("list --format json emits JSON");
    let array = patterns.as_array().expect("JSON array");
    assert_eq!(array.len(), 12);
    for pattern in array {
        assert!(pattern["id"].as_str().is_some());
        assert!(pattern["whenToUse"].as_str().is_some());
    }
}

#[test]
fn show_prints_the_full_write_up() {
    patternbook()
        .args(["show", "builder-pattern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Builder"))
        .stdout(predicate::str::contains("Problem"))
        .stdout(predicate::str::contains("Best practices"));
}

#[test]
fn show_json_flattens_the_document() {
    let output = patternbook()
        .args(["show", "strategy-pattern", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).expect("JSON document");
    assert_eq!(document["id"], "strategy-pattern");
    assert!(document["examples"].as_array().is_some());
    assert!(document.get("detailed").is_none());
}

#[test]
fn show_unknown_pattern_fails_with_exit_code_one() {
    patternbook()
        .args(["show", "not-real"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Pattern not found: not-real"))
        .stderr(predicate::str::contains("Known patterns:"));
}

#[test]
fn fundamentals_prints_all_four_principles() {
    patternbook()
        .arg("fundamentals")
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability"))
        .stdout(predicate::str::contains("Predictability"))
        .stdout(predicate::str::contains("Cohesion"))
        .stdout(predicate::str::contains("Coupling"));
}

#[test]
fn fundamentals_json_uses_camel_case_keys() {
    let output = patternbook()
        .args(["fundamentals", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).expect("JSON document");
    assert!(document["corePhilosophy"].as_str().is_some());
    assert!(document["balancingPrinciples"].as_array().is_some());
    assert!(document["principles"]["readability"].is_object());
}

#[test]
fn validate_passes_on_the_shipped_catalog() {
    patternbook()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 patterns"));
}

#[test]
fn validate_quiet_prints_nothing_on_success() {
    patternbook()
        .args(["validate", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completion_emits_a_script() {
    patternbook()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("patternbook"));
}
