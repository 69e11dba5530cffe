//! Integration tests for the `coordbackup` CLI binary.
//!
//! Every test works inside its own temp directory and points the config
//! lookup at a nonexistent home, so nothing touches real user files.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `coordbackup` binary with env isolation.
fn coordbackup_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("coordbackup");
    cmd.env("HOME", "/tmp/coordbackup-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/coordbackup-cli-test-nonexistent")
        .env_remove("COORDBACKUP_CONFIG")
        .env_remove("COORDBACKUP_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a backup at `dir/backup.json` through `coordbackup new`.
fn new_backup(dir: &Path) -> PathBuf {
    let file = dir.join("backup.json");
    coordbackup_cmd()
        .arg("new")
        .arg(&file)
        .args([
            "--source",
            "cli-test",
            "--coordinator-ieee",
            "00:12:4b:00:1c:a1:b8:46",
            "--pan-id",
            "1A62",
            "--extended-pan-id",
            "0xdd 0xdd 0xdd 0xdd 0xdd 0xdd 0xdd 0xdd",
            "--channel",
            "15",
            "--channel-mask",
            "11,15,20",
            "--network-key",
            "01030507090b0d0f00020406080a0c0d",
            "--frame-counter",
            "118785",
        ])
        .assert()
        .success();
    file
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = coordbackup_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Expected 'Usage' in output:\n{stderr}");
}

#[test]
fn test_help_flag() {
    coordbackup_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("open coordinator backup")
            .and(predicate::str::contains("add-device"))
            .and(predicate::str::contains("normalize")),
    );
}

#[test]
fn test_version_flag() {
    coordbackup_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("coordbackup"));
}

#[test]
fn test_completions_zsh() {
    coordbackup_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── normalize ───────────────────────────────────────────────────────

#[test]
fn test_normalize_pads_and_lowercases() {
    coordbackup_cmd()
        .args(["normalize", "0x00:0x12:4B", "--bytes", "4"])
        .assert()
        .success()
        .stdout("0000124b\n");
}

#[test]
fn test_normalize_json_output() {
    let output = coordbackup_cmd()
        .args(["-o", "json-compact", "hex", "AB", "-b", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["canonical"], "00ab");
    assert_eq!(value["bytes"], 2);
}

#[test]
fn test_normalize_rejects_oversized_width() {
    coordbackup_cmd()
        .args(["normalize", "12", "--bytes", "18446744073709551615"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bytes"));
    coordbackup_cmd()
        .args(["normalize", "12", "--bytes", "0"])
        .assert()
        .code(2);
}

// ── Backup lifecycle ────────────────────────────────────────────────

#[test]
fn test_new_writes_canonical_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = new_backup(dir.path());

    let text = std::fs::read_to_string(&file).unwrap();
    assert!(text.starts_with("{\n    \"metadata\": {\n"));
    assert!(text.ends_with("}\n"));

    let doc = read_json(&file);
    assert_eq!(doc["metadata"]["format"], "zigpy/open-coordinator-backup");
    assert_eq!(doc["metadata"]["version"], 1);
    assert_eq!(doc["metadata"]["source"], "cli-test");
    assert_eq!(doc["coordinator_ieee"], "00124b001ca1b846");
    assert_eq!(doc["pan_id"], "1a62");
    assert_eq!(doc["extended_pan_id"], "dddddddddddddddd");
    assert_eq!(doc["channel_mask"], serde_json::json!([11, 15, 20]));
    assert_eq!(doc["security_level"], 5);
    assert_eq!(doc["network_key"]["frame_counter"], 118_785);
    assert!(doc.get("devices").is_none());
    assert!(doc.get("stack_specific").is_none());
}

#[test]
fn test_new_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let file = new_backup(dir.path());

    coordbackup_cmd()
        .args(["new", file.to_str().unwrap()])
        .args(["--coordinator-ieee", "01", "--pan-id", "02", "--extended-pan-id", "03"])
        .args(["--channel", "11", "--network-key", "04"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_rejects_bad_security_level() {
    let dir = tempfile::tempdir().unwrap();
    coordbackup_cmd()
        .arg("new")
        .arg(dir.path().join("b.json"))
        .args(["--coordinator-ieee", "01", "--pan-id", "02", "--extended-pan-id", "03"])
        .args(["--channel", "11", "--network-key", "04", "--security-level", "12"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("security_level"));
    assert!(!dir.path().join("b.json").exists());
}

#[test]
fn test_add_device_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let file = new_backup(dir.path());

    coordbackup_cmd()
        .args(["add-device", file.to_str().unwrap()])
        .args(["--ieee", "00:0b:57:ff:fe:2b:d4:57", "--nwk", "4B7C"])
        .assert()
        .success();
    coordbackup_cmd()
        .args(["add-device", file.to_str().unwrap()])
        .args(["--ieee", "0x00158d0001a2b3c4", "--nwk", "0x0001", "--router"])
        .args(["--link-key", "aa", "--tx", "9"])
        .assert()
        .success();

    let doc = read_json(&file);
    let devices = doc["devices"].as_array().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["nwk_address"], "4b7c");
    assert_eq!(devices[0]["is_child"], true);
    assert!(devices[0].get("link_key").is_none());
    assert_eq!(devices[1]["is_child"], false);
    assert_eq!(devices[1]["link_key"]["key"], "000000000000000000000000000000aa");
    assert_eq!(devices[1]["link_key"]["tx_counter"], 9);

    coordbackup_cmd()
        .args(["-o", "plain", "devices", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("000b57fffe2bd457\n00158d0001a2b3c4\n");
}

#[test]
fn test_counters_require_link_key() {
    let dir = tempfile::tempdir().unwrap();
    let file = new_backup(dir.path());
    coordbackup_cmd()
        .args(["add-device", file.to_str().unwrap()])
        .args(["--ieee", "01", "--nwk", "02", "--rx", "5"])
        .assert()
        .code(2);
}

#[test]
fn test_show_summary() {
    let dir = tempfile::tempdir().unwrap();
    let file = new_backup(dir.path());
    coordbackup_cmd()
        .args(["--color", "never", "show", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Extended PAN ID: dddddddddddddddd")
                .and(predicate::str::contains("Channel mask:    11, 15, 20"))
                .and(predicate::str::contains("ENC_MIC32 (5)")),
        );
}

#[test]
fn test_show_json_is_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = new_backup(dir.path());
    let output = coordbackup_cmd()
        .args(["--output", "json", "show", file.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown, read_json(&file));
}

#[test]
fn test_fmt_check_and_rewrite() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("compact.json");
    std::fs::write(
        &file,
        r#"{"metadata":{"format":"zigpy/open-coordinator-backup","version":1,"source":"x"},"pan_id":"1a62","channel":11}"#,
    )
    .unwrap();

    coordbackup_cmd()
        .args(["fmt", "--check", file.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("canonical"));

    coordbackup_cmd()
        .args(["fmt", file.to_str().unwrap()])
        .assert()
        .success();

    coordbackup_cmd()
        .args(["fmt", "--check", file.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(read_json(&file)["pan_id"], "1a62");
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_missing_file_exit_code() {
    coordbackup_cmd()
        .args(["show", "/tmp/coordbackup-cli-test-nonexistent/missing.json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_json_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("broken.json");
    std::fs::write(&file, "{\"metadata\": ").unwrap();
    coordbackup_cmd()
        .args(["devices", file.to_str().unwrap()])
        .assert()
        .code(65);
}

#[test]
fn test_invalid_subcommand() {
    coordbackup_cmd()
        .arg("restore")
        .assert()
        .failure()
        .stderr(predicate::str::contains("restore"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honors_flag() {
    coordbackup_cmd()
        .args(["config", "path", "--config", "/tmp/somewhere/cb.toml"])
        .assert()
        .success()
        .stdout("/tmp/somewhere/cb.toml\n");
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");

    coordbackup_cmd()
        .args(["config", "init", "--config", cfg.to_str().unwrap()])
        .assert()
        .success();
    assert!(cfg.exists());

    coordbackup_cmd()
        .args(["config", "init", "--config", cfg.to_str().unwrap()])
        .assert()
        .code(6);

    coordbackup_cmd()
        .args(["config", "show", "--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]").and(predicate::str::contains("output = \"table\"")));
}

#[test]
fn test_config_source_is_stamped_into_new_backups() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    std::fs::write(&cfg, "[defaults]\nsource = \"home-assistant\"\n").unwrap();
    let file = dir.path().join("b.json");

    coordbackup_cmd()
        .env("COORDBACKUP_CONFIG", &cfg)
        .arg("new")
        .arg(&file)
        .args(["--coordinator-ieee", "01", "--pan-id", "02", "--extended-pan-id", "03"])
        .args(["--channel", "11", "--network-key", "04"])
        .assert()
        .success();
    assert_eq!(read_json(&file)["metadata"]["source"], "home-assistant");
}
