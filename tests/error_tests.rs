//! Error scenario integration tests
//!
//! Every case here fails before the clipboard would be read, or uses a
//! clipboard tool that is guaranteed to be missing.

use assert_cmd::Command;
use predicates::prelude::*;

fn cb2f() -> Command {
    let mut cmd = Command::cargo_bin("cb2f").expect("binary builds");
    cmd.env("CB2F_CONFIG", "/nonexistent/cb2f/config.toml")
        .env_remove("CB2F_OUTPUT_DIR")
        .env_remove("CB2F_CLIPBOARD_TOOL");
    cmd
}

#[test]
fn unsupported_format() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .arg("docx")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported format \"docx\""))
        .stderr(predicate::str::contains("png"));
}

#[test]
fn unsupported_extension_in_file_name() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .arg("report.pdf")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported format \"pdf\""));
}

#[test]
fn missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    cb2f()
        .arg("txt")
        .arg(&missing)
        // A clipboard read would fail with a different message
        .args(["--tool", "xclip"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("xclip").not());

    assert!(!missing.exists());
}

#[test]
fn output_path_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    cb2f()
        .arg("png")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn output_dir_from_environment_is_validated() {
    cb2f()
        .arg("txt")
        .env("CB2F_OUTPUT_DIR", "/nonexistent/cb2f-out")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/cb2f-out"));
}

#[test]
fn missing_clipboard_tool_reports_hint() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .arg("txt")
        .arg(dir.path())
        .args(["--tool", "xclip"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error accessing clipboard"))
        .stderr(predicate::str::contains("hint:"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn invalid_clipboard_tool() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .arg("txt")
        .arg(dir.path())
        .args(["--tool", "clipit"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid clipboard tool"));
}

#[test]
fn blank_name_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .arg("txt")
        .arg(dir.path())
        .args(["--name", " "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: cb2f"));
}

#[test]
fn name_with_directory_parts_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let escape = elsewhere.path().join("escape.txt");

    cb2f()
        .arg("txt")
        .arg(dir.path())
        .arg("--name")
        .arg(&escape)
        .args(["--tool", "xclip"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not contain directory parts"))
        .stderr(predicate::str::contains("xclip").not());

    assert!(!escape.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn input_file_name_in_missing_directory_fails_before_clipboard() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .arg("/nonexistent-cb2f/notes.txt")
        .arg(dir.path())
        .args(["--tool", "xclip"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: cb2f"))
        .stderr(predicate::str::contains("Error accessing clipboard").not());
}

#[test]
fn dot_only_name_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .arg("txt")
        .arg(dir.path())
        .args(["--name", "..."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not valid"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_output_directory_is_accepted() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let shots = dir.path().join(OsStr::from_bytes(b"shots\xff"));
    std::fs::create_dir(&shots).unwrap();

    // The directory passes validation, so the missing tool is what fails
    cb2f()
        .arg("txt")
        .arg(&shots)
        .args(["--tool", "xclip"])
        .env("PATH", "")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error accessing clipboard"))
        .stderr(predicate::str::contains("does not exist").not());
}

#[test]
fn config_get_unknown_key() {
    cb2f()
        .args(["config", "get", "unknown_key"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_tool() {
    let dir = tempfile::tempdir().unwrap();

    cb2f()
        .env("CB2F_CONFIG", dir.path().join("config.toml"))
        .args(["config", "set", "clipboard_tool", "clipit"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("clipboard_tool"));

    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn config_list_with_no_file() {
    cb2f()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output_dir"))
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn broken_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "output_dir = [").unwrap();

    cb2f()
        .env("CB2F_CONFIG", &config)
        .arg("docx")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("using defaults"))
        .stderr(predicate::str::contains("Unsupported format"));
}
