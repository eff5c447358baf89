//! Front-end commands.

mod batch;
mod repl;
mod run;

pub use batch::run_batch;
pub use repl::run_repl;
pub use run::{run_file, run_file_to};

use flow_eval::{HostIo, InterpreterBuilder};

use crate::FlowError;

/// Directory bare program names are looked up in.
pub const SAMPLES_DIR: &str = "samples";

/// Parse and run `source`, returning its output.
pub fn eval_source(source: &str, io: impl HostIo) -> Result<String, FlowError> {
    let program = flow_parse::parse(source)?;
    let output = InterpreterBuilder::new(&program).host_io(io).build().run()?;
    Ok(output)
}

/// Read a source file.
pub fn read_source(path: &str) -> Result<String, FlowError> {
    std::fs::read_to_string(path).map_err(|source| FlowError::Read {
        path: path.to_string(),
        source,
    })
}

/// Resolve a program name typed at a prompt: `counter` becomes
/// `samples/counter.flow`.
pub fn sample_path(name: &str) -> String {
    let mut path = if name.starts_with(SAMPLES_DIR) {
        name.to_string()
    } else {
        format!("{SAMPLES_DIR}/{name}")
    };
    if !path.ends_with(".flow") {
        path.push_str(".flow");
    }
    path
}

#[cfg(test)]
mod tests;
