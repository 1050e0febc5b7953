#![cfg(unix)]

mod common;

use std::fs;
use std::process::Command;

use common::{path_str, Harness};
use minish::engine::{extract_redirection, launch, ProcessResult, NOT_RUNNABLE_STATUS};
use minish::ExecutionResult;

#[test]
fn output_then_input_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let out = path_str(&dir.path().join("out.txt"));
    let copy = path_str(&dir.path().join("copy.txt"));
    let mut sh = Harness::new();

    sh.run(&format!("ls / > {}", out));
    sh.run(&format!("cat < {} > {}", out, copy));

    let expected = Command::new("ls").arg("/").output().unwrap().stdout;
    assert_eq!(fs::read(&out).unwrap(), expected);
    assert_eq!(fs::read(&copy).unwrap(), expected);
    assert_eq!(sh.err.contents(), "");
}

#[test]
fn output_redirect_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    fs::write(&out, "a much longer previous content\n").unwrap();
    let mut sh = Harness::new();

    sh.run(&format!("echo hi > {}", path_str(&out)));

    assert_eq!(fs::read_to_string(&out).unwrap(), "hi\n");
}

#[test]
fn quoted_argument_reaches_program_whole() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let mut sh = Harness::new();

    sh.run(&format!("printf %s| \"a  b\" > {}", path_str(&out)));

    assert_eq!(fs::read_to_string(&out).unwrap(), "a  b|");
}

#[test]
fn history_is_recorded_without_redirection() {
    let dir = tempfile::tempdir().unwrap();
    let out = path_str(&dir.path().join("out.txt"));
    let mut sh = Harness::new();

    sh.run(&format!("echo hi > {}", out));

    assert_eq!(sh.previous(), Some("echo hi"));
}

#[test]
fn unknown_program_is_reported_and_remembered() {
    let mut sh = Harness::new();

    let result = sh.run("notarealprogram123 --flag");

    assert_eq!(result, ExecutionResult::KeepRunning);
    assert!(sh.err.contents().contains("notarealprogram123: command not found"));
    assert_eq!(sh.previous(), Some("notarealprogram123 --flag"));
}

#[test]
fn unopenable_input_aborts_without_touching_history() {
    let mut sh = Harness::new();
    sh.run("true");

    sh.run("cat < /definitely/not/a/real/file.txt");

    assert!(sh.err.contents().contains("Could not open input file /definitely/not/a/real/file.txt"));
    assert_eq!(sh.previous(), Some("true"));
}

#[test]
fn unopenable_output_aborts_without_launching() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");
    let mut sh = Harness::new();

    sh.run(&format!("touch {} > /definitely/not/a/dir/out.txt", path_str(&marker)));

    assert!(sh.err.contents().contains("Could not open output file"));
    assert!(!marker.exists());
    assert_eq!(sh.previous(), None);
}

#[test]
fn every_segment_is_dispatched() {
    let dir = tempfile::tempdir().unwrap();
    let names: Vec<_> = ["a", "b", "c"].iter().map(|n| dir.path().join(n)).collect();
    let mut sh = Harness::new();

    sh.run(&format!(
        "touch {} ; ; touch {};touch {}",
        path_str(&names[0]),
        path_str(&names[1]),
        path_str(&names[2])
    ));

    assert!(names.iter().all(|p| p.exists()));
    assert_eq!(sh.previous(), Some(format!("touch {}", path_str(&names[2])).as_str()));
}

#[test]
fn quote_fault_does_not_stop_later_segments() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");
    let mut sh = Harness::new();

    sh.run(&format!("echo \"oops ; touch {}", path_str(&marker)));

    assert!(sh.err.contents().contains("unmatched double quote"));
    assert!(marker.exists());
}

#[test]
fn overlong_line_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");
    let mut config = minish::Config::default_config();
    config.shell.max_line_length = 10;
    let mut sh = Harness::with_config(config);

    sh.run(&format!("touch {}", path_str(&marker)));

    assert!(sh.err.contents().contains("exceeds 10 characters"));
    assert!(!marker.exists());
}

#[test]
fn launch_reports_exit_status() {
    let mut sink = Vec::new();

    let ok = launch(&extract_redirection(vec!["true".to_string()]), &mut sink).unwrap();
    assert!(ok.success());

    let failed = launch(&extract_redirection(vec!["false".to_string()]), &mut sink).unwrap();
    assert!(!failed.success());

    let missing = launch(&extract_redirection(vec!["notarealprogram123".to_string()]), &mut sink).unwrap();
    assert!(matches!(missing, ProcessResult::NotRunnable(_)));
    assert_eq!(missing.code(), NOT_RUNNABLE_STATUS);
}
