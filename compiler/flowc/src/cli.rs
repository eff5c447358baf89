//! Command-line flags.

use thiserror::Error;

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `-f <file>`
    pub file: Option<String>,
    /// `-i`
    pub interactive: bool,
    /// `-m`
    pub batch: bool,
    /// `-c`: ask for a file name on stdin.
    pub prompt_for_file: bool,
    /// `-h`
    pub help: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("missing filename argument for -f")]
    MissingFile,
    #[error("invalid argument: {0}")]
    Unknown(String),
}

/// Parse the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliOptions, ArgError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "-f" => {
                let file = args.next().ok_or(ArgError::MissingFile)?;
                options.file = Some(file.as_ref().to_string());
            }
            "-i" => options.interactive = true,
            "-m" => options.batch = true,
            "-c" => options.prompt_for_file = true,
            "-h" => options.help = true,
            other => return Err(ArgError::Unknown(other.to_string())),
        }
    }
    Ok(options)
}

pub const USAGE: &str = "\
Usage: flow [-f <file>] [-i] [-m] [-c] [-h]
  -f <file>   Run a Flow source file
  -i          Interactive mode
  -m          Run several programs from the samples folder
  -c          Prompt for one program from the samples folder
  -h          Show this help";
