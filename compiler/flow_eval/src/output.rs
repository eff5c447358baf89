//! Accumulated program output.
//!
//! The interpreter owns one buffer per evaluation and reads it out once, when
//! the program finishes successfully. Nothing is streamed to the host while a
//! program runs.

/// Append-only text buffer for `print` and recovered-fault diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer::default()
    }

    /// Append a line (with newline).
    pub fn println(&mut self, msg: &str) {
        self.buffer.push_str(msg);
        self.buffer.push('\n');
    }

    /// Append without newline.
    pub fn print(&mut self, msg: &str) {
        self.buffer.push_str(msg);
    }

    /// Captured output so far.
    pub fn get_output(&self) -> &str {
        &self.buffer
    }

    /// Read the output out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
