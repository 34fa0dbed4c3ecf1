//! CLI tests for the `binary-reps` binary.

use std::process::{Command, Output};

use primer::exit_codes;
use primer::test_support::write_config_file;

fn run_binary_reps(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_binary-reps"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run binary-reps")
}

#[test]
fn no_args_prints_six_lines_in_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_binary_reps(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "A = 1000001",
            "B = 1000010",
            "C = 1000011",
            "D = 1000100",
            "E = 1000101",
            "F = 1000110",
        ]
    );
}

#[test]
fn configured_range_is_inclusive() {
    let (temp, _path) =
        write_config_file("[binary_table]\nstart = \"0\"\nend = \"1\"\n").expect("config");
    let output = run_binary_reps(temp.path(), &["--format", "json"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"0\":\"110000\",\"1\":\"110001\"}\n"
    );
}

#[test]
fn reversed_range_is_rejected() {
    let (temp, _path) =
        write_config_file("[binary_table]\nstart = \"F\"\nend = \"A\"\n").expect("config");
    let output = run_binary_reps(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}

#[test]
fn explicit_missing_config_falls_back_to_defaults() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_binary_reps(temp.path(), &["--config", "nope.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 6);
}

#[test]
fn unknown_format_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_binary_reps(temp.path(), &["--format", "xml"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}
