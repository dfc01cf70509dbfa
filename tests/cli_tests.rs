mod support;

use std::path::Path;
use std::process::{Command, Output};

use support::files::{config_with_snapshot, write_file};

fn propedge(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_propedge"))
        .args(args)
        .current_dir(cwd)
        .env_remove("ODDS_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("run propedge")
}

fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "bad.toml", "[scan]\nthreshold = 90\n");

    let output = propedge(dir.path(), &["config", "validate", "-c", path.to_str().unwrap()]);

    assert!(!output.status.success(), "Expected nonzero exit code");
    let text = combined(&output);
    assert!(
        text.contains("invalid value for threshold"),
        "Expected error message about invalid config.\n{text}"
    );
}

#[test]
fn markets_lists_default_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let output = propedge(dir.path(), &["markets"]);

    assert!(output.status.success(), "{}", combined(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Bases"));
    assert!(stdout.contains("pitcher_strikeouts"));
}

#[test]
fn scan_without_market_feed_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_file(
        &dir,
        "reference.json",
        r#"[{"Player": "Aaron Judge", "Market": "Total Bases", "Over": "-110", "Under": "-110"}]"#,
    );
    let config = write_file(&dir, "propedge.toml", &config_with_snapshot(&snapshot));

    let output = propedge(dir.path(), &["scan", "-c", config.to_str().unwrap()]);

    let text = combined(&output);
    assert!(output.status.success(), "{text}");
    assert!(text.contains("Market provider failed"), "{text}");
    assert!(text.contains("No data"), "{text}");
}

#[test]
fn scan_fails_when_both_providers_fail() {
    let dir = tempfile::tempdir().unwrap();
    let output = propedge(dir.path(), &["scan"]);

    assert!(!output.status.success());
    assert!(combined(&output).contains("both odds providers failed"));
}

#[test]
fn json_scan_emits_only_records_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_file(&dir, "reference.json", "[]");

    let output = propedge(
        dir.path(),
        &["--json", "scan", "--reference", snapshot.to_str().unwrap()],
    );

    assert!(output.status.success(), "{}", combined(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("every stdout line is JSON"))
        .collect();
    assert!(records
        .iter()
        .all(|record| matches!(record["type"].as_str(), Some("result" | "skipped" | "summary"))));

    let summary = records.last().expect("summary record");
    assert_eq!(summary["type"], "summary");
    assert_eq!(summary["payload"]["reference_rows"], 0);
    assert_eq!(summary["payload"]["market_rows"], 0);
    assert!(summary["payload"]["reference_error"].is_null());
    assert!(summary["payload"]["market_error"]
        .as_str()
        .is_some_and(|err| err.contains("ODDS_API_KEY")));
}

#[test]
fn config_init_writes_a_valid_template() {
    let dir = tempfile::tempdir().unwrap();

    let output = propedge(dir.path(), &["config", "init"]);
    assert!(output.status.success(), "{}", combined(&output));
    assert!(dir.path().join("propedge.toml").exists());

    let output = propedge(dir.path(), &["config", "validate"]);
    assert!(output.status.success(), "{}", combined(&output));

    let output = propedge(dir.path(), &["config", "init"]);
    assert!(!output.status.success());
}
