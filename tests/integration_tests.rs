//! 命令行集成测试
//!
//! 运行编译好的 deskcalc 与 deskcalc-check，检查输出与退出码。

use std::io::Write;
use std::process::{Command, Output, Stdio};

const DESKCALC: &str = env!("CARGO_BIN_EXE_deskcalc");
const DESKCALC_CHECK: &str = env!("CARGO_BIN_EXE_deskcalc-check");

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute {}: {}", bin, e))
}

fn run_with_stdin(bin: &str, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to execute {}: {}", bin, e));
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for child")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_evaluate_expression() {
    let output = run(DESKCALC, &["(2+3)*4"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "20");
}

#[test]
fn test_evaluate_error_renders_context() {
    let output = run(DESKCALC, &["(1+2"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Expected ')'"), "got: {}", err);
    assert!(err.contains("1 | (1+2"), "got: {}", err);
}

#[test]
fn test_percent_mode() {
    let output = run(DESKCALC, &["--percent", "0.5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "50");

    let output = run(DESKCALC, &["--percent", "bad("]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output).trim(), "Error");
}

#[test]
fn test_toggle_sign_mode() {
    let output = run(DESKCALC, &["--toggle-sign", "3+-5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "3+5");

    // 单个 '-' 开头的参数是表达式而不是选项
    let output = run(DESKCALC, &["--toggle-sign", "-12"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "12");
}

#[test]
fn test_keys_mode() {
    let output = run(DESKCALC, &["--keys", "12+3=~"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "-15");
}

#[test]
fn test_stdin_lines() {
    let output = run_with_stdin(DESKCALC, &[], "1+1\n\n10/4\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "2\n2.5\n");
}

#[test]
fn test_stdin_continues_after_error() {
    let output = run_with_stdin(DESKCALC, &[], "1+\n6*7\n");
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "42\n");
    assert!(stderr(&output).contains("Expected number"));
}

#[test]
fn test_stdin_keys_share_calculator() {
    let output = run_with_stdin(DESKCALC, &["--keys"], "2+3=\n*4=\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\n20\n");
}

#[test]
fn test_unknown_option() {
    let output = run(DESKCALC, &["--frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--frobnicate"));
}

#[test]
fn test_version() {
    let output = run(DESKCALC, &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_check_full() {
    let output = run(DESKCALC_CHECK, &["1+2*3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("[1]"), "got: {}", out);
    assert!(out.contains("[2]"), "got: {}", out);
    assert!(out.contains("7"), "got: {}", out);
}

#[test]
fn test_check_lex_only() {
    let output = run(DESKCALC_CHECK, &["--lex-only", "(1 + 2"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("6 个记号"), "got: {}", out);
    assert!(out.contains("whitespace"), "got: {}", out);
    assert!(!out.contains("[2]"), "got: {}", out);
}

#[test]
fn test_check_parse_error() {
    let output = run(DESKCALC_CHECK, &["--parse-only", "1 2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unexpected input at offset 1"));
}

#[test]
fn test_check_requires_expression() {
    let output = run(DESKCALC_CHECK, &[]);
    assert_eq!(output.status.code(), Some(1));
}
