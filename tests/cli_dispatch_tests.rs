use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_bystander")
}

fn unique_temp_path(name: &str, ext: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("bystander-{name}-{stamp}.{ext}"))
}

#[test]
fn eval_command_emits_every_variant_as_json() {
    let output = Command::new(bin())
        .args(["eval", "2", "1", "0", "10", "0.5"])
        .output()
        .expect("eval should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("eval should emit json");
    assert_eq!(payload["classic_two_player"].as_f64(), Some(0.5));
    let social = payload["social_distance_n_player"].as_f64().expect("number");
    assert!((social - (1.0 - (1.0f64 / 11.0).powf(1.0 / 9.0))).abs() < 1e-12);
}

#[test]
fn eval_command_rejects_unordered_payoffs() {
    let output = Command::new(bin())
        .args(["eval", "1", "2", "0", "3"])
        .output()
        .expect("eval should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("evaluation failed"));
}

#[test]
fn eval_command_returns_usage_on_missing_args() {
    let output = Command::new(bin())
        .args(["eval", "2", "1"])
        .output()
        .expect("eval should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: bystander eval"));
}

#[test]
fn sweep_command_reads_config_and_emits_csv() {
    let path = unique_temp_path("sweep", "yaml");
    fs::write(&path, "max_players: 5\nsocial_distances: [0.5]\n").expect("fixture should be written");

    let output = Command::new(bin())
        .args(["sweep", path.to_string_lossy().as_ref(), "--csv"])
        .output()
        .expect("sweep should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("family,series,players,probability"));
    // 2 series in each deterministic family, 5 in the gaussian family, 4 player counts each.
    assert_eq!(lines.count(), (2 + 2 + 5) * 4);

    let _ = fs::remove_file(path);
}

#[test]
fn sweep_command_emits_json_and_writes_files() {
    let config = unique_temp_path("sweep-json", "yaml");
    fs::write(&config, "max_players: 4\n").expect("fixture should be written");
    let out_dir = unique_temp_path("sweep-out", "d");

    let output = Command::new(bin())
        .args([
            "sweep",
            config.to_string_lossy().as_ref(),
            "--out",
            out_dir.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("sweep should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("sweep should emit json");
    assert_eq!(payload["families"].as_array().map(Vec::len), Some(3));
    assert!(out_dir.join("n_player_nash_gaussian.csv").exists());
    assert!(out_dir.join("sweep.json").exists());

    let _ = fs::remove_file(config);
    let _ = fs::remove_dir_all(out_dir);
}

#[test]
fn validate_command_returns_non_zero_on_invalid_config() {
    let path = unique_temp_path("invalid", "yaml");
    fs::write(&path, "min_players: 1\n").expect("fixture should be written");

    let output = Command::new(bin())
        .args(["validate", path.to_string_lossy().as_ref()])
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("validation failed"));

    let _ = fs::remove_file(path);
}

#[test]
fn unknown_command_prints_usage() {
    let output = Command::new(bin())
        .arg("plot")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: bystander"));
}
