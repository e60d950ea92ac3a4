//! Integration tests for the `voice-weather` binary.
//!
//! Lookups stay disabled here, so no network access is needed.

use std::path::Path;
use std::process::Command;

/// Run the CLI against an isolated config dir and capture output.
fn run_cli(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_voice-weather"))
        .arg("--config")
        .arg(dir.join("config.toml"))
        .arg("--map")
        .arg(dir.join("weather-map.json"))
        .args(args)
        .env_remove("OPENWEATHERAPI_ENABLED")
        .env_remove("OPENWEATHERAPI_KEY")
        .env_remove("OPENWEATHERAPI_CC")
        .output()
        .expect("Failed to execute voice-weather")
}

#[test]
fn test_help_flag_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["--help"]);

    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ask"), "Help should mention the ask command");
    assert!(stdout.contains("configure"), "Help should mention configure");
}

#[test]
fn test_ask_without_config_prints_default_weather() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(
        dir.path(),
        &["ask", "what's the weather in Paris France", "--location", "Seattle"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Snow"));
    assert!(stdout.contains("Paris France"));
    assert!(stdout.contains("120 C"));
}

#[test]
fn test_ask_json_uses_fallback_location() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(
        dir.path(),
        &["ask", "what's the weather", "--location", "Seattle", "--json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["speakable_location"], "Seattle");
    assert_eq!(value["temperature"], "120");
    assert_eq!(value["temperature_unit"], "C");
    assert_eq!(value["is_forecast"], false);
}

#[test]
fn test_config_path_honours_override() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["config-path"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.toml"));
    assert!(stdout.contains(&*dir.path().to_string_lossy()));
}

#[test]
fn test_unknown_subcommand_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(dir.path(), &["forecast"]);

    assert!(!output.status.success());
}
