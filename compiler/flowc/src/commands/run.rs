//! The file mode: run one source file and print its output.

use std::io::{self, IsTerminal, Write};

use flow_eval::{HostIo, StdHostIo};
use tracing::debug;

use super::{eval_source, read_source};
use crate::report;

const BANNER: &str = "[PROGRAM OUTPUT]";

/// Run `path` against the real console and file system, printing to
/// stdout. Returns `false` if the program could not be read, parsed or run.
pub fn run_file(path: &str) -> bool {
    let mut stdout = io::stdout();
    let color = stdout.is_terminal();
    run_file_to(path, &mut stdout, StdHostIo::new(), color).unwrap_or(false)
}

/// Run `path`, writing the banner and program output to `out`. Diagnostics
/// go to stderr.
pub fn run_file_to<W: Write>(
    path: &str,
    out: &mut W,
    io: impl HostIo,
    color: bool,
) -> io::Result<bool> {
    debug!(path, "running file");
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            report::emit(&err, path, "");
            return Ok(false);
        }
    };

    match eval_source(&source, io) {
        Ok(output) => {
            if color {
                writeln!(out, "\u{1b}[45m{BANNER}\u{1b}[0m")?;
            } else {
                writeln!(out, "{BANNER}")?;
            }
            write!(out, "{output}")?;
            out.flush()?;
            Ok(true)
        }
        Err(err) => {
            report::emit(&err, path, &source);
            Ok(false)
        }
    }
}
