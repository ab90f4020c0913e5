//! CLI integration tests for radix64
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn radix64() -> Command {
    Command::cargo_bin("radix64").unwrap()
}

const URL_SAFE_TOML: &str = r#"
[alphabets.url]
chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"
padding = "."
description = "URL-safe variant"
"#;

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    radix64()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base64 encoder and decoder"));
}

#[test]
fn test_version() {
    radix64()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("radix64"));
}

#[test]
fn test_missing_subcommand_fails() {
    radix64().assert().failure();
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_stdin() {
    radix64()
        .arg("encode")
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");
}

#[test]
fn test_encode_empty_stdin() {
    radix64()
        .arg("encode")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_decode_stdin() {
    radix64()
        .arg("decode")
        .write_stdin("aGVsbG8gd29ybGQ=\n")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let encoded = dir.path().join("encoded.txt");
    let decoded = dir.path().join("decoded.bin");
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    fs::write(&input, &data).unwrap();

    radix64()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success();

    radix64()
        .arg("decode")
        .arg(&encoded)
        .arg("-o")
        .arg(&decoded)
        .assert()
        .success();

    assert_eq!(fs::read(&decoded).unwrap(), data);
}

#[test]
fn test_stream_encode_matches_in_memory() {
    radix64()
        .args(["encode", "--stream"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");
}

#[test]
fn test_stream_decode_skips_line_breaks() {
    radix64()
        .args(["decode", "-s"])
        .write_stdin("aGVsbG8g\nd29ybGQ=\n")
        .assert()
        .success()
        .stdout("hello world");
}

// ============================================================================
// Decode errors
// ============================================================================

#[test]
fn test_decode_invalid_symbol() {
    radix64()
        .arg("decode")
        .write_stdin("AB#D")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '#' at position 2"));
}

#[test]
fn test_decode_malformed_length() {
    radix64()
        .arg("decode")
        .write_stdin("ABCDE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid length"));
}

#[test]
fn test_decode_malformed_padding() {
    radix64()
        .arg("decode")
        .write_stdin("A===")
        .assert()
        .failure()
        .stderr(predicate::str::contains("padding"));
}

#[test]
fn test_decode_strict_rejects_non_canonical_tail() {
    radix64()
        .arg("decode")
        .write_stdin("QR==")
        .assert()
        .success()
        .stdout("A");

    radix64()
        .args(["decode", "--strict"])
        .write_stdin("QR==")
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 1"));
}

#[test]
fn test_stream_decode_rejects_data_after_padding() {
    radix64()
        .args(["decode", "--stream"])
        .write_stdin("Zg==Zm9v")
        .assert()
        .failure()
        .stderr(predicate::str::contains("padding"));
}

// ============================================================================
// Alphabets and configuration
// ============================================================================

#[test]
fn test_unknown_alphabet_suggests_closest() {
    radix64()
        .args(["encode", "-a", "base46"])
        .write_stdin("hi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("base46"))
        .stderr(predicate::str::contains("base64"));
}

#[test]
fn test_config_list() {
    radix64()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base64"));
}

#[test]
fn test_config_list_json() {
    let output = radix64()
        .args(["config", "list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["default_alphabet"], "base64");
    assert_eq!(json["strict"], false);
    assert!(
        json["alphabets"]
            .as_array()
            .unwrap()
            .iter()
            .any(|a| a["name"] == "base64")
    );
}

#[test]
fn test_config_show() {
    radix64()
        .args(["config", "show", "base64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Padding: ="))
        .stdout(predicate::str::contains("Valid: yes"));
}

#[test]
fn test_custom_alphabet_from_config_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("extra.toml");
    fs::write(&config, URL_SAFE_TOML).unwrap();

    radix64()
        .arg("--config")
        .arg(&config)
        .args(["encode", "-a", "url"])
        .write_stdin([0xFB, 0xFF])
        .assert()
        .success()
        .stdout("-_8.\n");

    radix64()
        .arg("--config")
        .arg(&config)
        .args(["decode", "-a", "url"])
        .write_stdin("-_8.")
        .assert()
        .success()
        .stdout(vec![0xFB, 0xFF]);
}

#[test]
fn test_project_local_settings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("alphabets.toml"),
        format!("{}\n[settings]\ndefault_alphabet = \"url\"\nstrict = true\n", URL_SAFE_TOML),
    )
    .unwrap();

    radix64()
        .current_dir(dir.path())
        .arg("encode")
        .write_stdin([0xFB, 0xFF])
        .assert()
        .success()
        .stdout("-_8.\n");

    radix64()
        .current_dir(dir.path())
        .args(["decode", "-a", "base64"])
        .write_stdin("QR==")
        .assert()
        .failure();
}

#[test]
fn test_missing_config_file_fails() {
    radix64()
        .args(["--config", "/nonexistent/radix64.toml", "config", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load config"));
}

// ============================================================================
// Size limits
// ============================================================================

#[test]
fn test_max_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("big.bin");
    fs::write(&input, vec![0u8; 100]).unwrap();

    radix64()
        .args(["--max-size", "10", "encode"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));

    radix64()
        .args(["--max-size", "10", "--force", "encode"])
        .arg(&input)
        .assert()
        .success();
}
