//! The interactive mode.
//!
//! Lines accumulate until they parse as a complete program. Each complete
//! chunk runs on its own, with a fresh symbol table.

use std::io::{self, BufRead, Write};

use flow_eval::{HostIo, InterpreterBuilder};
use tracing::debug;

const PROMPT: &str = "> ";

/// Read-eval-print loop until `exit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    host: &mut dyn HostIo,
) -> io::Result<()> {
    let mut pending = String::new();
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim() == "exit" {
            break;
        }
        pending.push_str(&line);
        pending.push('\n');

        match flow_parse::parse(&pending) {
            Err(err) if err.is_incomplete() => {
                debug!("incomplete input, reading more");
            }
            Err(err) => {
                writeln!(out, "<ERROR> syntax error: {err}")?;
                pending.clear();
            }
            Ok(program) => {
                pending.clear();
                let result = InterpreterBuilder::new(&program)
                    .host_io(&mut *host)
                    .build()
                    .run();
                match result {
                    Ok(output) => write!(out, "{output}")?,
                    Err(err) => writeln!(out, "<ERROR> {err}")?,
                }
            }
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    Ok(())
}
