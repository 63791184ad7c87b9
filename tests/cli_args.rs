//! Runs the built binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn humanize_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_humanize-ai"))
}

#[test]
fn test_help_lists_options_and_rewrite() {
    let output = humanize_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("--tone"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("rewrite"));
}

#[test]
fn test_invalid_mode_exits_with_error() {
    let output = humanize_cmd()
        .args(["--mode", "turbo"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}

#[test]
fn test_rewrite_without_key_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[api]\napi_key_env = \"HUMANIZE_AI_TEST_UNSET_KEY\"\n").unwrap();

    let mut child = humanize_cmd()
        .arg("--config")
        .arg(&config)
        .arg("rewrite")
        .env_remove("HUMANIZE_AI_TEST_UNSET_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Some AI text.")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API key not found"));
    assert!(output.stdout.is_empty());
}
