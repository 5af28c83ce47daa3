//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with HOME pointed at a scratch directory so
//! the user's real configuration is never touched.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli_in(
    home: &std::path::Path,
    args: &[&str],
    stdin: Option<&str>,
) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ecohelper-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("ECOHELPER_ENV")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    } else {
        drop(child.stdin.take());
    }

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let home = tempfile::tempdir().unwrap();
    run_cli_in(home.path(), args, None)
}

#[test]
fn test_summary_empty() {
    let (stdout, _, code) = run_cli(&["summary"]);
    assert_eq!(code, 0, "summary failed");
    assert!(stdout.contains("Water Usage: 0 liters"));
    assert!(stdout.contains("Start logging activities"));
    assert!(stdout.contains("No activities logged yet."));
}

#[test]
fn test_summary_with_logs() {
    let (stdout, _, code) = run_cli(&[
        "summary",
        "--log",
        "water:shower:40",
        "--log",
        "energy:hvac:10",
    ]);
    assert_eq!(code, 0, "summary failed");
    assert!(stdout.contains("potential saving: 8 liters"));
    assert!(stdout.contains("Energy Usage: 10 kWh  (potential saving: 2 kWh)"));
    assert!(stdout.contains("Heating/Cooling"));
}

#[test]
fn test_summary_json() {
    let (stdout, _, code) = run_cli(&["summary", "--log", "water:bath:2.5", "--json"]);
    assert_eq!(code, 0, "summary --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["water"]["value"], 2.5);
    assert_eq!(parsed["water"]["potential_saving"], 1);
    assert_eq!(parsed["activities"]["count"], 1);
    assert_eq!(parsed["recent"][0]["label"], "Bath");
}

#[test]
fn test_invalid_log_rejected() {
    let (_, stderr, code) = run_cli(&["summary", "--log", "water:shower:-5"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Please enter a valid duration"));

    let (_, stderr, code) = run_cli(&["tips", "--log", "water:shower:abc"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Please enter a valid duration"));

    let (_, stderr, code) = run_cli(&["tips", "--log", "gas:stove:1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("rejected 'gas:stove:1': Unknown category 'gas'"));
}

#[test]
fn test_tips_json() {
    let (stdout, _, code) = run_cli(&["tips", "--log", "water:shower:40", "--json"]);
    assert_eq!(code, 0, "tips failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tips = parsed.as_array().unwrap();
    assert!(tips.len() <= 6);
    assert_eq!(tips[0]["title"], "Shorter Showers");
    assert_eq!(tips[0]["icon"], "droplets");
    assert!(tips
        .iter()
        .all(|t| t["category"] == "water" || t["category"] == "general"));
}

#[test]
fn test_tips_empty_is_catalog_head() {
    let (stdout, _, code) = run_cli(&["tips", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let titles: Vec<_> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        titles,
        [
            "Shorter Showers",
            "Cold Water Laundry",
            "LED Light Bulbs",
            "Fix Leaky Faucets",
            "Unplug Devices",
            "Full Loads Only"
        ]
    );
}

#[test]
fn test_types() {
    let (stdout, _, code) = run_cli(&["types", "water"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Garden Watering"));
    assert!(!stdout.contains("Computer"));

    let (_, _, code) = run_cli(&["types", "plasma"]);
    assert_ne!(code, 0);
}

#[test]
fn test_session_script() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli_in(
        home.path(),
        &["session"],
        Some("log water shower 40\nlog water shower -5\ndashboard\nquit\n"),
    );
    assert_eq!(code, 0, "session failed");
    assert!(stdout.contains("Activity logged successfully!"));
    assert!(stdout.contains("rejected: Please enter a valid duration"));
    assert!(stdout.contains("Activities Logged: 1"));
    assert!(stdout.contains("[high impact] Shorter Showers  <droplets>"));
}

fn config_cmd(home: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let mut full = vec!["config"];
    full.extend_from_slice(args);
    run_cli_in(home, &full, None)
}

#[test]
fn test_config_set_get_reset() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = config_cmd(home.path(), &["get", "display.recent_limit"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10");

    let (stdout, _, code) = config_cmd(home.path(), &["set", "display.recent_limit", "3"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");
    assert!(home.path().join(".config/ecohelper/config.toml").exists());

    let (stdout, _, _) = config_cmd(home.path(), &["get", "display.recent_limit"]);
    assert_eq!(stdout.trim(), "3");

    let (_, _, code) = config_cmd(home.path(), &["set", "display.recent_limit", "50"]);
    assert_ne!(code, 0);

    let (_, _, code) = config_cmd(home.path(), &["get", "display.nope"]);
    assert_ne!(code, 0);

    let (_, _, code) = config_cmd(home.path(), &["reset"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = config_cmd(home.path(), &["get", "display.recent_limit"]);
    assert_eq!(stdout.trim(), "10");
}

#[test]
fn test_broken_config_file() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".config/ecohelper");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[display]\nrecent_limit = \n").unwrap();

    let (_, stderr, code) = config_cmd(home.path(), &["get", "display.recent_limit"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Configuration error: Failed to parse configuration"));

    // Other commands fall back to defaults.
    let (stdout, _, code) = run_cli_in(home.path(), &["summary"], None);
    assert_eq!(code, 0);
    assert!(stdout.contains("Water Usage: 0 liters"));
}

#[test]
fn test_recent_limit_applies_to_summary() {
    let home = tempfile::tempdir().unwrap();
    config_cmd(home.path(), &["set", "display.recent_limit", "1"]);
    let (stdout, _, code) = run_cli_in(
        home.path(),
        &["summary", "--log", "water:bath:80", "--log", "water:garden:30", "--json"],
        None,
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["recent"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["recent"][0]["label"], "Garden Watering");
    assert_eq!(parsed["activities"]["count"], 2);
}
