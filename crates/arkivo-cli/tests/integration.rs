//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn run_cli(args: &[&str]) -> (Option<i32>, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_arkivo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    (output.status.code(), stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], stdin: &str) -> (Option<i32>, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_arkivo"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    (
        output.status.code(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_normalize_command() {
    let (code, stdout, _) = run_cli(&["normalize", "000123.4500"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "123.45");
}

#[test]
fn test_normalize_accepts_leading_minus() {
    let (code, stdout, _) = run_cli(&["normalize", "-0"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "0");

    let (code, stdout, _) = run_cli(&["normalize", "--", "-----864.3135"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "-864.3135");
}

#[test]
fn test_normalize_json_output() {
    let (code, stdout, _) = run_cli(&["normalize", "--json", ".50"]);
    assert_eq!(code, Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("Invalid JSON");
    assert_eq!(value["input"], ".50");
    assert_eq!(value["canonical"], "0.5");
}

#[test]
fn test_normalize_rejects_malformed_input() {
    let (code, stdout, stderr) = run_cli(&["normalize", "12ab"]);
    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error: malformed decimal"), "{stderr}");
}

#[test]
fn test_compare_command() {
    let (code, stdout, _) = run_cli(&["compare", "12.34", "12.345"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "-1");

    let (_, stdout, _) = run_cli(&["compare", "234397293", "234397293"]);
    assert_eq!(stdout.trim(), "0");

    let (_, stdout, _) = run_cli(&["compare", "--", "630397283", "-630397283"]);
    assert_eq!(stdout.trim(), "1");
}

#[test]
fn test_compare_json_output() {
    let (code, stdout, _) = run_cli(&["compare", "--json", "1.0", "1"]);
    assert_eq!(code, Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("Invalid JSON");
    assert_eq!(value["ordering"], 0);
}

#[test]
fn test_add_command() {
    let (code, stdout, _) = run_cli(&["add", "999.999", "0.001"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "1000");

    let (_, stdout, _) = run_cli(&["add", "12345678901234567890", "0.55"]);
    assert_eq!(stdout.trim(), "12345678901234567890.55");
}

#[test]
fn test_add_rejects_mixed_signs() {
    let (code, _, stderr) = run_cli(&["add", "--", "5", "-3"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("opposite signs"), "{stderr}");
}

#[test]
fn test_sum_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0.1").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "0.2").unwrap();
    writeln!(file, "1.700").unwrap();

    let path = file.path().to_string_lossy().to_string();
    let (code, stdout, _) = run_cli(&["sum", &path]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "2");

    let (_, stdout, _) = run_cli(&["sum", &path, "--json"]);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("Invalid JSON");
    assert_eq!(value["count"], 3);
    assert_eq!(value["sum"], "2");
}

#[test]
fn test_sum_from_stdin() {
    let (code, stdout, _) = run_cli_with_stdin(&["sum"], "123\n877\n");
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "1000");
}

#[test]
fn test_sum_reports_bad_line() {
    let (code, _, stderr) = run_cli_with_stdin(&["sum"], "1\n2\nx\n");
    assert_eq!(code, Some(1));
    assert!(stderr.contains("line 3"), "{stderr}");
}

#[test]
fn test_sum_missing_file() {
    let (code, _, stderr) = run_cli(&["sum", "/nonexistent/arkivo/input.txt"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Failed to read file"), "{stderr}");
}

#[test]
fn test_check_command() {
    let (code, stdout, _) = run_cli(&["check", "4", "4.00"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "correct");

    let (code, stdout, _) = run_cli(&["check", "4", "4.01"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "incorrect");
}

#[test]
fn test_check_strict_exit_code() {
    let (code, stdout, _) = run_cli(&["check", "--strict", "0.3", "0.30000000000000004"]);
    assert_eq!(code, Some(2));
    assert_eq!(stdout.trim(), "incorrect");
}

#[test]
fn test_check_json_output() {
    let (code, stdout, _) = run_cli(&["check", "--json", "0.3", "00.30"]);
    assert_eq!(code, Some(0));
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("Invalid JSON");
    assert_eq!(value["correct"], true);
    assert_eq!(value["given"], "0.3");
}

#[test]
fn test_check_rejects_invalid_answer() {
    let (code, _, stderr) = run_cli(&["check", "4", "four"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("Invalid submitted answer"), "{stderr}");
}

#[test]
fn test_piped_logs_are_plain_text() {
    let (code, stdout, stderr) = run_cli(&["-vvv", "normalize", "0010"]);
    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "10");
    assert!(stderr.contains("normalized decimal string"), "{stderr}");
    assert!(!stderr.contains('\u{1b}'), "{stderr:?}");
}
