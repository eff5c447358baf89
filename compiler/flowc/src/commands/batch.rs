//! The batch mode: run programs from the samples folder by name.

use std::io::{self, BufRead, Write};

use flow_eval::HostIo;

use super::{run_file_to, sample_path};

/// Read program names until `exit`, running each one.
pub fn run_batch<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    host: &mut dyn HostIo,
) -> io::Result<()> {
    writeln!(out, "Execute multiple files from samples folder. Enter 'exit' to exit.")?;
    writeln!(out)?;

    let mut lines = input.lines();
    loop {
        writeln!(out, "Enter file name:")?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let name = line.trim();
        if name == "exit" {
            break;
        }
        if name.is_empty() {
            continue;
        }

        run_file_to(&sample_path(name), out, &mut *host, false)?;
        writeln!(out)?;
    }
    Ok(())
}
