//! Host I/O collaborator.
//!
//! The evaluator performs console and file access only through [`HostIo`].
//! [`StdHostIo`] talks to the real process; [`ScriptedIo`] serves canned
//! input and an in-memory file system for tests and embedders.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::errors::{io_failure, EvalError};

/// Failure reported by a [`HostIo`] primitive.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("end of input")]
    EndOfInput,
    #[error("{path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("console: {0}")]
    Console(#[from] io::Error),
}

impl IoError {
    /// What the failing operation was acting on.
    pub fn target(&self) -> &str {
        match self {
            IoError::EndOfInput | IoError::Console(_) => "console",
            IoError::File { path, .. } => path,
        }
    }

    /// Why it failed, without the target.
    pub fn reason(&self) -> String {
        match self {
            IoError::EndOfInput => "end of input".to_string(),
            IoError::File { source, .. } | IoError::Console(source) => source.to_string(),
        }
    }
}

impl From<IoError> for EvalError {
    fn from(err: IoError) -> Self {
        io_failure(err.target(), &err.reason())
    }
}

/// Console and file primitives used by `readChar`, `readLine`, `readFile`
/// and `writeFile`.
pub trait HostIo {
    fn read_char(&mut self) -> Result<char, IoError>;

    /// One line of console input, without its terminator.
    fn read_line(&mut self) -> Result<String, IoError>;

    fn read_file(&mut self, path: &str) -> Result<String, IoError>;

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), IoError>;
}

impl<T: HostIo + ?Sized> HostIo for &mut T {
    fn read_char(&mut self) -> Result<char, IoError> {
        (**self).read_char()
    }

    fn read_line(&mut self) -> Result<String, IoError> {
        (**self).read_line()
    }

    fn read_file(&mut self, path: &str) -> Result<String, IoError> {
        (**self).read_file(path)
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), IoError> {
        (**self).write_file(path, content)
    }
}

/// Process stdin and the local file system.
///
/// Console input is read a line at a time; `read_char` hands out the
/// characters of the current line (newline included) before reading more.
#[derive(Debug, Default)]
pub struct StdHostIo {
    pending: VecDeque<char>,
}

impl StdHostIo {
    pub fn new() -> Self {
        StdHostIo::default()
    }

    fn fill(&mut self) -> Result<(), IoError> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(IoError::EndOfInput);
        }
        self.pending.extend(line.chars());
        Ok(())
    }
}

impl HostIo for StdHostIo {
    fn read_char(&mut self) -> Result<char, IoError> {
        if self.pending.is_empty() {
            self.fill()?;
        }
        self.pending.pop_front().ok_or(IoError::EndOfInput)
    }

    fn read_line(&mut self) -> Result<String, IoError> {
        if self.pending.is_empty() {
            self.fill()?;
        }
        Ok(take_line(&mut self.pending))
    }

    fn read_file(&mut self, path: &str) -> Result<String, IoError> {
        std::fs::read_to_string(path).map_err(|source| IoError::File {
            path: path.to_string(),
            source,
        })
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), IoError> {
        std::fs::write(path, content).map_err(|source| IoError::File {
            path: path.to_string(),
            source,
        })
    }
}

/// Deterministic host: fixed console input and an in-memory file system.
#[derive(Clone, Debug, Default)]
pub struct ScriptedIo {
    input: VecDeque<char>,
    files: FxHashMap<String, String>,
}

impl ScriptedIo {
    /// A host whose console yields `input`, then end of input.
    pub fn new(input: &str) -> Self {
        ScriptedIo {
            input: input.chars().collect(),
            files: FxHashMap::default(),
        }
    }

    /// Seed a file.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Current content of a file, including ones the program wrote.
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl HostIo for ScriptedIo {
    fn read_char(&mut self) -> Result<char, IoError> {
        self.input.pop_front().ok_or(IoError::EndOfInput)
    }

    fn read_line(&mut self) -> Result<String, IoError> {
        if self.input.is_empty() {
            return Err(IoError::EndOfInput);
        }
        Ok(take_line(&mut self.input))
    }

    fn read_file(&mut self, path: &str) -> Result<String, IoError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| IoError::File {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn write_file(&mut self, path: &str, content: &str) -> Result<(), IoError> {
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }
}

/// Drain characters up to and including the next `\n`, returning the line
/// without its terminator (`\r\n` included).
fn take_line(chars: &mut VecDeque<char>) -> String {
    let mut line = String::new();
    while let Some(c) = chars.pop_front() {
        if c == '\n' {
            break;
        }
        line.push(c);
    }
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

#[cfg(test)]
mod tests;
