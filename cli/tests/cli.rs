use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cards_lists_the_catalog() {
    let mut cmd = Command::cargo_bin("cli").expect("binary builds");
    cmd.arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strike"))
        .stdout(predicate::str::contains("Deal 6 damage."));
}

#[test]
fn cards_json_is_machine_readable() {
    let mut cmd = Command::cargo_bin("cli").expect("binary builds");
    let output = cmd.args(["cards", "--json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).expect("utf8");
    let rows: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(rows.as_array().expect("array of cards").len(), 5);
}

#[test]
fn simulate_reports_a_verdict() {
    let mut cmd = Command::cargo_bin("cli").expect("binary builds");
    cmd.args(["simulate", "--campaign", "warrens", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result="));
}

#[test]
fn simulate_rejects_unknown_campaigns() {
    let mut cmd = Command::cargo_bin("cli").expect("binary builds");
    cmd.args(["simulate", "--campaign", "nowhere"])
        .assert()
        .failure();
}
