use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;

#[test]
fn scripted_console_reads_chars_then_lines() {
    let mut io = ScriptedIo::new("ab\r\nsecond line\nlast");
    assert_eq!(io.read_char().ok(), Some('a'));
    assert_eq!(io.read_line().ok().as_deref(), Some("b"));
    assert_eq!(io.read_line().ok().as_deref(), Some("second line"));
    assert_eq!(io.read_line().ok().as_deref(), Some("last"));
    assert!(matches!(io.read_line(), Err(IoError::EndOfInput)));
    assert!(matches!(io.read_char(), Err(IoError::EndOfInput)));
}

#[test]
fn scripted_files_round_trip() {
    let mut io = ScriptedIo::new("").with_file("in.txt", "data");
    assert_eq!(io.read_file("in.txt").ok().as_deref(), Some("data"));
    assert!(io.write_file("out.txt", "written").is_ok());
    assert_eq!(io.file("out.txt"), Some("written"));
}

#[test]
fn missing_file_names_its_path() {
    let mut io = ScriptedIo::new("");
    let Err(err) = io.read_file("nope.txt") else {
        panic!("reading a missing file should fail");
    };
    assert_eq!(err.target(), "nope.txt");
    assert_eq!(err.reason(), "no such file");
}

#[test]
fn io_errors_become_io_failures() {
    let eval: EvalError = IoError::EndOfInput.into();
    assert_eq!(
        eval.kind,
        EvalErrorKind::IoFailure {
            target: "console".to_string(),
            reason: "end of input".to_string()
        }
    );
    assert!(eval.is_recoverable());
}

#[test]
fn mutable_references_are_hosts() {
    fn first_char(mut host: impl HostIo) -> Option<char> {
        host.read_char().ok()
    }

    let mut io = ScriptedIo::new("xy");
    assert_eq!(first_char(&mut io), Some('x'));
    assert_eq!(io.read_char().ok(), Some('y'));
}

#[test]
fn take_line_strips_terminators() {
    let mut chars: VecDeque<char> = "one\r\ntwo".chars().collect();
    assert_eq!(take_line(&mut chars), "one");
    assert_eq!(take_line(&mut chars), "two");
    assert!(chars.is_empty());
}
