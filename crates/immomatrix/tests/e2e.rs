//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const FALLBACK_ERROR: &str =
    "Fehler bei der Generierung der Marketing-Texte. Bitte prüfen Sie den API Key.";

fn immomatrix() -> Command {
    let mut cmd = Command::cargo_bin("immomatrix").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("IMMOMATRIX_ENDPOINT")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(args: &[&str]) -> serde_json::Value {
    let output = immomatrix().args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn help_flag() {
    immomatrix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vacancy"))
        .stdout(predicate::str::contains("roi"));
}

#[test]
fn version_flag() {
    immomatrix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("immomatrix"));
}

#[test]
fn dashboard_is_default() {
    immomatrix()
        .assert()
        .success()
        .stdout(predicate::str::contains("Leerstand minimieren"));
}

#[test]
fn vacancy_sample() {
    immomatrix()
        .arg("vacancy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kostenaufstellung"))
        .stdout(predicate::str::contains("CHF 37’500"))
        .stdout(predicate::str::contains("CHF 40’500"))
        .stdout(predicate::str::contains("CHF 16’200"));
}

#[test]
fn vacancy_quiet() {
    immomatrix()
        .args(["vacancy", "-q"])
        .assert()
        .success()
        .stdout("CHF 40’500\n");
}

#[test]
fn vacancy_flags() {
    immomatrix()
        .args(["vacancy", "--units", "10", "-q"])
        .assert()
        .success()
        .stdout("CHF 81’000\n");
}

#[test]
fn vacancy_verbose_echoes_inputs() {
    immomatrix()
        .args(["vacancy", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eingaben"))
        .stdout(predicate::str::contains("Monatsmiete pro Einheit"));
}

#[test]
fn roi_sample() {
    immomatrix()
        .arg("roi")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finanzielle Prognose"))
        .stdout(predicate::str::contains("CHF 288’000"))
        .stdout(predicate::str::contains("+CHF 1’000"))
        .stdout(predicate::str::contains("2790.0%"));
}

#[test]
fn roi_zero_budget() {
    immomatrix()
        .args(["roi", "--budget", "0", "-q"])
        .assert()
        .success()
        .stdout("0.0%\n");
}

#[test]
fn roi_negative_budget() {
    immomatrix()
        .args(["roi", "--budget", "-500", "-q"])
        .assert()
        .success()
        .stdout("0.0%\n");
}

#[test]
fn roi_set_override() {
    immomatrix()
        .args(["roi", "--set", "budget=20'000", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"leads\": 400"));
}

#[test]
fn unknown_field_is_config_error() {
    immomatrix()
        .args(["vacancy", "--set", "rent=1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown field: rent"));
}

#[test]
fn invalid_number_is_config_error() {
    immomatrix()
        .args(["roi", "--set", "budget=viel"])
        .assert()
        .code(4);
}

#[test]
fn json_error_envelope() {
    let output = immomatrix()
        .args(["vacancy", "--json", "--set", "nope"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ok"], false);
}

#[test]
fn vacancy_json() {
    let value = json_stdout(&["vacancy", "--json"]);
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["result"]["total_loss"], 40_500.0);
    assert_eq!(value["data"]["breakdown"].as_array().unwrap().len(), 2);
}

#[test]
fn roi_json() {
    let value = json_stdout(&["roi", "--json"]);
    assert_eq!(value["data"]["result"]["leases"], 12);
    assert_eq!(value["data"]["funnel"][0]["label"], "Leads");
}

#[test]
fn dashboard_json() {
    let value = json_stdout(&["dashboard", "--json"]);
    assert_eq!(value["data"]["brand"], "ImmoMatrix");
}

#[test]
fn draft_without_key_falls_back() {
    immomatrix()
        .arg("draft")
        .assert()
        .success()
        .stderr(predicate::str::contains(FALLBACK_ERROR));
}

#[test]
fn draft_unreachable_service_falls_back() {
    let value = json_stdout(&[
        "draft",
        "--json",
        "--api-key",
        "test-key",
        "--endpoint",
        "http://127.0.0.1:1",
    ]);
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["fallback"], true);
    assert_eq!(value["data"]["text"], FALLBACK_ERROR);
    assert_eq!(value["data"]["model"], "gemini-2.5-flash");
}

#[test]
fn draft_model_flag_is_reported() {
    let value = json_stdout(&[
        "draft",
        "--json",
        "--api-key",
        "test-key",
        "--endpoint",
        "http://127.0.0.1:1",
        "--model",
        "gemini-2.0-pro",
    ]);
    assert_eq!(value["data"]["fallback"], true);
    assert_eq!(value["data"]["model"], "gemini-2.0-pro");
}

#[test]
fn draft_fallback_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.txt");
    immomatrix()
        .args(["draft", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert!(!path.exists());
}

#[test]
fn completion_bash() {
    immomatrix()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("immomatrix"));
}

#[test]
fn unknown_subcommand_fails() {
    immomatrix().arg("rechnen").assert().failure();
}
