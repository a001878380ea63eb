//! Pipeline progress logs.
//!
//! A [`Logger`] writes one line per [`LogEntry`] to any `io::Write`
//! (stderr for the CLI, so stdout stays free for `--summary`). Stage
//! entries carry the table shape after each pipeline step.

use std::fmt;
use std::io::{self, Write};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        }
    }
}

/// A single log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, three spaces per level
    pub indent: u8,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), indent: 0 }
    }

    /// Table shape after a pipeline stage, e.g. `After melting: (12, 3)`.
    pub fn stage(name: &str, rows: usize, cols: usize) -> Self {
        Self::new(LogLevel::Info, format!("After {}: ({}, {})", name, rows, cols))
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "   ".repeat(self.indent as usize);
        write!(f, "{}{} {}", indent, self.level.prefix(), self.message)
    }
}

/// Writes log entries, one per line.
///
/// Write failures are ignored: losing a progress line never aborts a run.
pub struct Logger<W = io::Stderr> {
    out: W,
}

impl Logger {
    /// Logger for the terminal.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Logger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn log(&mut self, entry: LogEntry) {
        let _ = writeln!(self.out, "{}", entry);
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Info, msg));
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Success, msg));
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Warning, msg));
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Error, msg));
    }

    pub fn stage(&mut self, name: &str, rows: usize, cols: usize) {
        self.log(LogEntry::stage(name, rows, cols));
    }
}
