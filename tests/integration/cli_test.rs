//! Integration tests for the chatcsv command line

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{arg, fixtures_dir, run_chatcsv, temp_fixture};

fn chatcsv() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_chatcsv"));
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", "/nonexistent/chatcsv-test")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and Usage
// ============================================================================

#[test]
fn help_exits_0_and_lists_commands() {
    let (stdout, _stderr, exit_code) = run_chatcsv(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Usage: chatcsv"));
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("completions"));
    assert!(stdout.contains("--output-filename"));
}

#[test]
fn version_starts_with_package_version() {
    let (stdout, _stderr, exit_code) = run_chatcsv(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with(&format!("chatcsv {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn unknown_count_mode_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_chatcsv(&["--count-mode", "triple"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("triple"));
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn convert_corpus_to_stdout() {
    let sources = fixtures_dir().join("corpus");
    let (stdout, stderr, exit_code) = run_chatcsv(&["-q", "-s", arg(&sources), "-o", "-"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    subject_id,segment_id,speaker,sentence,row_number,switch_count
    12,1,MOT,look at the perro@s .,13,1
    12,1,MOT,es un int@x perro grande@s .,16,2
    12,1,MOT,es un int@x perro grande@s .,16,2
    12,2,CHI,I want agua@s and leche@s .,18,2
    12,2,CHI,I want agua@s and leche@s .,18,2
    7,1,CHI,mira the ball@s .,7,1
    ");
}

#[test]
fn convert_subcommand_with_aggregate_mode() {
    let sources = fixtures_dir().join("corpus");
    let (stdout, _stderr, exit_code) = run_chatcsv(&[
        "convert",
        "-q",
        "--sources",
        arg(&sources),
        "--output-filename",
        "-",
        "--count-mode",
        "aggregate",
    ]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    subject_id,segment_id,speaker,sentence,row_number,switch_count
    12,1,MOT,look at the perro@s .,13,1
    12,1,MOT,es un int@x perro grande@s .,16,2
    12,2,CHI,I want agua@s and leche@s .,18,2
    7,1,CHI,mira the ball@s .,7,1
    ");
}

#[test]
fn convert_writes_file_and_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("output").join("output.csv");
    let sources = fixtures_dir().join("corpus");

    let (stdout, stderr, exit_code) =
        run_chatcsv(&["-s", arg(&sources), "-o", arg(&output)]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Converted 2 file(s), skipped 0, wrote 6 row(s)"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 7);
    assert!(written.starts_with("subject_id,segment_id,speaker,sentence,row_number,switch_count\n"));
}

#[test]
fn convert_logs_each_processed_file() {
    let sources = fixtures_dir().join("corpus");
    chatcsv()
        .args(["-s", arg(&sources), "-o", "-"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing"))
        .stderr(predicate::str::contains("12_3.cha"))
        .stderr(predicate::str::contains("7_1.cha"))
        .stderr(predicate::str::contains("notes.txt").not());
}

#[test]
fn exclude_leaves_file_out() {
    let sources = fixtures_dir().join("corpus");
    let (stdout, _stderr, exit_code) = run_chatcsv(&[
        "-q",
        "-s",
        arg(&sources),
        "-o",
        "-",
        "--exclude",
        "12_3.cha",
    ]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    subject_id,segment_id,speaker,sentence,row_number,switch_count
    7,1,CHI,mira the ball@s .,7,1
    ");
}

#[test]
fn single_file_source_is_accepted() {
    let source = fixtures_dir().join("corpus").join("7_1.cha");
    let (stdout, _stderr, exit_code) = run_chatcsv(&["-q", "-s", arg(&source), "-o", "-"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("7,1,CHI,mira the ball@s .,7,1"));
}

#[test]
fn empty_source_dir_writes_header_only() {
    let temp = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = run_chatcsv(&["-s", arg(temp.path()), "-o", "-"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "subject_id,segment_id,speaker,sentence,row_number,switch_count\n"
    );
    assert!(stderr.contains("no transcripts found"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn missing_sources_dir_fails() {
    let (_stdout, stderr, exit_code) =
        run_chatcsv(&["-s", "/nonexistent/chatcsv/sources", "-o", "-"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to list sources"));
}

#[test]
fn malformed_transcript_aborts_without_output() {
    let (temp, sources) = temp_fixture("broken");
    let output = temp.path().join("out.csv");

    let (_stdout, stderr, exit_code) =
        run_chatcsv(&["-q", "-s", arg(&sources), "-o", arg(&output)]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("3_1.cha"));
    assert!(stderr.contains("Expected segment header on line 3"));
    assert!(!output.exists(), "aborted run must not create the output");
}

#[test]
fn skip_policy_converts_remaining_files() {
    let (temp, sources) = temp_fixture("broken");
    let output = temp.path().join("out.csv");

    let (_stdout, stderr, exit_code) = run_chatcsv(&[
        "-s",
        arg(&sources),
        "-o",
        arg(&output),
        "--on-error",
        "skip",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stderr.contains("skipping transcript"));
    assert!(stderr.contains("Converted 1 file(s), skipped 1, wrote 1 row(s)"));

    let written = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(written.trim_end(), @r"
    subject_id,segment_id,speaker,sentence,row_number,switch_count
    4,1,MOT,adios@s .,4,1
    ");
}

#[test]
fn bad_file_name_is_reported() {
    let sources = fixtures_dir().join("badname");
    let (stdout, stderr, exit_code) = run_chatcsv(&["-q", "-s", arg(&sources), "-o", "-"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Could not parse file name: session.cha"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_file_sets_policies_and_delimiter() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let sources = fixtures_dir().join("corpus");
    fs::write(
        &config,
        "[output]\npath = \"-\"\ndelimiter = \";\"\n\n[parse]\ncount_mode = \"aggregate\"\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) =
        run_chatcsv(&["-q", "--config", arg(&config), "-s", arg(&sources)]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    subject_id;segment_id;speaker;sentence;row_number;switch_count
    12;1;MOT;look at the perro@s .;13;1
    12;1;MOT;es un int@x perro grande@s .;16;2
    12;2;CHI;I want agua@s and leche@s .;18;2
    7;1;CHI;mira the ball@s .;7;1
    ");
}

#[test]
fn invalid_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[parse]\non_error = \"retry\"\n").unwrap();

    let (_stdout, stderr, exit_code) = run_chatcsv(&["--config", arg(&config), "-o", "-"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn config_show_prints_effective_toml() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[parse]\ncount_mode = \"aggregate\"\n").unwrap();

    let (stdout, _stderr, exit_code) = run_chatcsv(&["config", "show", "--config", arg(&config)]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[parse]"));
    assert!(stdout.contains("count_mode = \"aggregate\""));
    assert!(stdout.contains("on_error = \"abort\""));
    assert!(stdout.contains("segment_prefix = \"@T:\""));
}

#[test]
fn config_path_prints_explicit_path() {
    chatcsv()
        .args(["config", "path", "--config", "/tmp/custom/chatcsv.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/custom/chatcsv.toml"));
}

#[test]
fn completions_generates_script() {
    chatcsv()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatcsv"));
}
