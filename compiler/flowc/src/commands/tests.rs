#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use flow_eval::ScriptedIo;
use pretty_assertions::assert_eq;

use super::*;

fn repl(input: &str) -> String {
    let mut out = Vec::new();
    let mut host = ScriptedIo::new("");
    run_repl(Cursor::new(input), &mut out, &mut host).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn eval_source_returns_output() {
    let output = eval_source("print(1 + 2);", ScriptedIo::new("")).unwrap();
    assert_eq!(output, "3\n");
}

#[test]
fn eval_source_separates_parse_and_runtime_errors() {
    assert!(matches!(
        eval_source("print(;", ScriptedIo::new("")),
        Err(FlowError::Parse(_))
    ));
    assert!(matches!(
        eval_source("print(nope);", ScriptedIo::new("")),
        Err(FlowError::Eval(_))
    ));
}

#[test]
fn sample_path_adds_folder_and_extension() {
    assert_eq!(sample_path("counter"), "samples/counter.flow");
    assert_eq!(sample_path("counter.flow"), "samples/counter.flow");
    assert_eq!(sample_path("samples/counter"), "samples/counter.flow");
}

#[test]
fn missing_file_is_a_read_error() {
    let err = read_source("definitely/not/here.flow").unwrap_err();
    assert!(matches!(err, FlowError::Read { .. }));
    assert!(err.to_string().contains("definitely/not/here.flow"));
}

#[test]
fn run_file_to_reports_unreadable_file() {
    let mut out = Vec::new();
    let ok = run_file_to("definitely/not/here.flow", &mut out, ScriptedIo::new(""), false).unwrap();
    assert!(!ok);
    assert!(out.is_empty());
}

#[test]
fn run_file_to_prints_banner_then_output() {
    let path = std::env::temp_dir().join(format!("flowc-run-{}.flow", std::process::id()));
    std::fs::write(&path, "print(\"hi\");\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let mut out = Vec::new();
    let ok = run_file_to(&path, &mut out, ScriptedIo::new(""), false).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(ok);
    assert_eq!(String::from_utf8(out).unwrap(), "[PROGRAM OUTPUT]\nhi\n");
}

#[test]
fn repl_runs_each_complete_chunk() {
    assert_eq!(repl("print(1);\nprint(2);\nexit\n"), "> 1\n> 2\n> ");
}

#[test]
fn repl_waits_for_incomplete_input() {
    let out = repl("if (1 < 2) {\nprint(4);\n}\n");
    assert_eq!(out, "> > > 4\n> ");
}

#[test]
fn repl_reports_errors_and_recovers() {
    let out = repl("print(nope);\nprint(;\nprint(5);\n");
    let lines: Vec<&str> = out.split("> ").filter(|s| !s.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("<ERROR> "));
    assert!(lines[1].starts_with("<ERROR> syntax error"));
    assert_eq!(lines[2], "5\n");
}

#[test]
fn batch_stops_on_exit() {
    let mut out = Vec::new();
    let mut host = ScriptedIo::new("");
    run_batch(Cursor::new("exit\nmissing\n"), &mut out, &mut host).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Execute multiple files from samples folder."));
    assert_eq!(out.matches("Enter file name:").count(), 1);
}
