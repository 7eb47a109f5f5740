//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway config file
//! and verify outputs.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Run a CLI command with `--config <config>` and return output.
fn run_cli(config: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "tabgroup-cli", "--", "--config"])
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn workspace() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    (dir, config)
}

fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("tabs.json");
    let tabs = serde_json::json!([
        {"id": 1, "url": "https://internal-tool.corp/page/1", "title": "Page 1"},
        {"id": 2, "url": "https://internal-tool.corp/page/2", "title": "Page 2"},
        {"id": 3, "url": "https://internal-tool.corp/page/3", "title": "Page 3"},
        {"id": 4, "url": "https://internal-tool.corp/page/4", "title": "Page 4"},
        {"id": 5, "url": "https://internal-tool.corp/page/5", "title": "Page 5"},
        {"id": 6, "url": "chrome://newtab/"}
    ]);
    std::fs::write(&path, tabs.to_string()).unwrap();
    path
}

const WEDNESDAY: &str = "2024-03-06T11:00:00+00:00";

#[test]
fn test_evaluate_best() {
    let (dir, config) = workspace();
    let snapshot = write_snapshot(dir.path());
    let (code, stdout, stderr) = run_cli(
        &config,
        &["evaluate", snapshot.to_str().unwrap(), "--now", WEDNESDAY],
    );
    assert_eq!(code, 0, "evaluate failed: {stderr}");

    let best: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(best["name"], "internal-tool.corp");
    assert_eq!(best["tabIds"], serde_json::json!([1, 2, 3, 4, 5]));
}

#[test]
fn test_evaluate_all() {
    let (dir, config) = workspace();
    let snapshot = write_snapshot(dir.path());
    let (code, stdout, _) = run_cli(
        &config,
        &["evaluate", snapshot.to_str().unwrap(), "--now", WEDNESDAY, "--all"],
    );
    assert_eq!(code, 0, "evaluate --all failed");

    let all: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    let names: Vec<_> = all.iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["internal-tool.corp", "Work"]);
}

#[test]
fn test_evaluate_disabled_prints_null() {
    let (dir, config) = workspace();
    let snapshot = write_snapshot(dir.path());
    let (code, _, _) = run_cli(&config, &["config", "set", "grouping.enable_auto_grouping", "false"]);
    assert_eq!(code, 0, "config set failed");

    let (code, stdout, _) = run_cli(
        &config,
        &["evaluate", snapshot.to_str().unwrap(), "--now", WEDNESDAY],
    );
    assert_eq!(code, 0, "evaluate failed");
    assert_eq!(stdout.trim(), "null");
}

#[test]
fn test_evaluate_rejects_bad_now() {
    let (dir, config) = workspace();
    let snapshot = write_snapshot(dir.path());
    let (code, _, stderr) = run_cli(
        &config,
        &["evaluate", snapshot.to_str().unwrap(), "--now", "yesterday"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_classify() {
    let (_dir, config) = workspace();
    let (code, stdout, _) = run_cli(
        &config,
        &["classify", "https://www.github.com/rust-lang/rust", "--title", "Compiler debug notes"],
    );
    assert_eq!(code, 0, "classify failed");

    let out: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(out["host"], "www.github.com");
    assert_eq!(out["domainCategory"], "Development");
    assert_eq!(out["keywordCategories"], serde_json::json!(["Development"]));
}

#[test]
fn test_rules_list() {
    let (_dir, config) = workspace();
    let (code, stdout, _) = run_cli(&config, &["rules", "list"]);
    assert_eq!(code, 0, "rules list failed");
    assert!(stdout.contains("Domain categories:"));
    assert!(stdout.contains("Development"));
}

#[test]
fn test_rules_list_json() {
    let (_dir, config) = workspace();
    let (code, stdout, _) = run_cli(&config, &["rules", "list", "--json"]);
    assert_eq!(code, 0, "rules list --json failed");

    let rules: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(rules["domain"].as_array().is_some_and(|d| !d.is_empty()));
    assert!(rules["keyword"].as_array().is_some_and(|k| !k.is_empty()));
}

#[test]
fn test_config_get() {
    let (_dir, config) = workspace();
    let (code, stdout, _) = run_cli(&config, &["config", "get", "grouping.confidence_threshold"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "70");
}

#[test]
fn test_config_set_persists() {
    let (_dir, config) = workspace();
    let (code, _, _) = run_cli(&config, &["config", "set", "grouping.confidence_threshold", "85"]);
    assert_eq!(code, 0, "config set failed");

    let (_, stdout, _) = run_cli(&config, &["config", "get", "grouping.confidence_threshold"]);
    assert_eq!(stdout.trim(), "85");
}

#[test]
fn test_config_set_rejects_out_of_range() {
    let (_dir, config) = workspace();
    let (code, _, stderr) = run_cli(&config, &["config", "set", "grouping.confidence_threshold", "150"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_config_list_and_reset() {
    let (_dir, config) = workspace();
    let (code, stdout, _) = run_cli(&config, &["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["grouping"]["enable_auto_grouping"], true);

    let (code, _, _) = run_cli(&config, &["config", "reset"]);
    assert_eq!(code, 0, "config reset failed");
}

#[test]
fn test_config_unknown_key() {
    let (_dir, config) = workspace();
    let (code, _, _) = run_cli(&config, &["config", "get", "grouping.nope"]);
    assert_eq!(code, 1);
}
