//! CLI argument parsing and end-to-end tests

use clap::Parser as ClapParser;
use goore_cli::{Cli, CliError, OutputFormat, Runner};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Argument parsing
// =============================================================================

/// Test parsing no arguments (default behavior)
#[test]
fn cli_parse_no_args() {
    let cli = Cli::try_parse_from(vec!["goore"]).unwrap();

    assert_eq!(cli.file, None);
    assert_eq!(cli.eval, None);
    assert!(!cli.tokens);
    assert_eq!(cli.format, OutputFormat::Dump);
    assert_eq!(cli.verbose, 0);
}

/// Test parsing a positional file
#[test]
fn cli_parse_file() {
    let cli = Cli::try_parse_from(vec!["goore", "main.goore"]).unwrap();

    assert_eq!(cli.file, Some("main.goore".to_string()));
}

/// Test parsing -e and --eval
#[test]
fn cli_parse_eval() {
    let short = Cli::try_parse_from(vec!["goore", "-e", "1 + 2"]).unwrap();
    let long = Cli::try_parse_from(vec!["goore", "--eval", "1 + 2"]).unwrap();

    assert_eq!(short.eval, Some("1 + 2".to_string()));
    assert_eq!(long.eval, short.eval);
}

/// Test that a file and inline code cannot be combined
#[test]
fn cli_parse_file_conflicts_with_eval() {
    assert!(Cli::try_parse_from(vec!["goore", "main.goore", "-e", "x"]).is_err());
}

/// Test parsing --format
#[test]
fn cli_parse_format() {
    let cli = Cli::try_parse_from(vec!["goore", "--format", "json", "-e", "x"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);

    assert!(Cli::try_parse_from(vec!["goore", "--format", "yaml"]).is_err());
}

/// Test counting -v flags
#[test]
fn cli_parse_verbosity() {
    let cli = Cli::try_parse_from(vec!["goore", "-vv", "--tokens", "-e", "x"]).unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(cli.tokens);
}

// =============================================================================
// Runner over files
// =============================================================================

#[test]
fn run_file_prints_dump() {
    let file = source_file("while i < 10 {\n  i += 1\n}\n");
    let path = file.path().to_str().unwrap();

    let mut out = Vec::new();
    let report = Runner::new(OutputFormat::Dump)
        .run_file(path, &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(report.is_clean());
    assert!(text.starts_with(&format!("(1:1):(3:1):Program: {}\n", path)));
    assert!(text.contains("While"));
    assert!(text.contains("Let: +="));
}

#[test]
fn run_file_reports_errors_with_path() {
    let file = source_file("def = 1\n");
    let path = file.path().to_str().unwrap();

    let mut out = Vec::new();
    let report = Runner::new(OutputFormat::Dump)
        .run_file(path, &mut out)
        .unwrap();

    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0]
        .to_string()
        .starts_with(&format!("{}:(1:5):(1:5): unexpected token", path)));
}

#[test]
fn run_missing_file_is_read_error() {
    let mut out = Vec::new();
    let err = Runner::new(OutputFormat::Dump)
        .run_file("/nonexistent/dir/missing.goore", &mut out)
        .unwrap_err();

    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().contains("missing.goore"));
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn binary_exit_status_reflects_errors() {
    let ok = Command::new(env!("CARGO_BIN_EXE_goore"))
        .args(["-e", "def x = [1, 2]"])
        .output()
        .unwrap();
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).contains("ArrayLiteral"));
    assert!(ok.stderr.is_empty());

    let bad = Command::new(env!("CARGO_BIN_EXE_goore"))
        .args(["-e", "[1\n2]"])
        .output()
        .unwrap();
    assert!(!bad.status.success());
    assert!(String::from_utf8_lossy(&bad.stderr).contains("-e:(2:1):(2:1): missing comma"));
}

#[test]
fn binary_without_input_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_goore")).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no input"));
}
