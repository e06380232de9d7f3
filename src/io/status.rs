//! Status line sinks for run diagnostics.
//!
//! The pipeline reports every halt, failed write and saved file as one line
//! of text. Where that line goes is decided by the caller: the console for
//! the CLI, a memory buffer for tests.
//!
//! # Example
//!
//! ```rust
//! use review_sentiment::io::status::{MemoryStatus, StatusSink};
//!
//! let status = MemoryStatus::new();
//! status.error("The file is empty.");
//! assert_eq!(status.lines(), vec!["Error: The file is empty."]);
//! ```

use colored::Colorize;
use std::io::Write;
use std::sync::{Arc, RwLock};

/// Receiver for user-facing status lines.
pub trait StatusSink: Send + Sync {
    /// Report a completed step.
    fn success(&self, message: &str);

    /// Report a failure; rendered with an `Error: ` prefix.
    fn error(&self, message: &str);
}

/// Prints status lines to the console, optionally colored.
///
/// Lines go to stdout unless the sink was built with
/// [`ConsoleStatus::stderr`], which keeps stdout free for a machine-readable
/// report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleStatus {
    color: bool,
    to_stderr: bool,
}

impl ConsoleStatus {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            to_stderr: false,
        }
    }

    pub fn stderr(color: bool) -> Self {
        Self {
            color,
            to_stderr: true,
        }
    }

    fn print(&self, line: &str) {
        // Nothing sensible to do if the stream is gone.
        if self.to_stderr {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        } else {
            let _ = writeln!(std::io::stdout().lock(), "{}", line);
        }
    }
}

impl StatusSink for ConsoleStatus {
    fn success(&self, message: &str) {
        if self.color {
            self.print(&message.green().to_string());
        } else {
            self.print(message);
        }
    }

    fn error(&self, message: &str) {
        if self.color {
            self.print(&format!("{} {}", "Error:".red().bold(), message));
        } else {
            self.print(&format!("Error: {}", message));
        }
    }
}

/// Captures status lines in memory for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatus {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemoryStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.read().expect("RwLock poisoned").clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .read()
            .expect("RwLock poisoned")
            .iter()
            .any(|l| l.contains(needle))
    }

    fn push(&self, line: String) {
        self.lines.write().expect("RwLock poisoned").push(line);
    }
}

impl StatusSink for MemoryStatus {
    fn success(&self, message: &str) {
        self.push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_status_records_in_order() {
        let status = MemoryStatus::new();
        status.success("File saved successfully at out.csv.");
        status.error("disk full");

        assert_eq!(
            status.lines(),
            vec!["File saved successfully at out.csv.", "Error: disk full"]
        );
        assert!(status.contains("disk full"));
        assert!(!status.contains("missing"));
    }

    #[test]
    fn test_memory_status_clones_share_buffer() {
        let status = MemoryStatus::new();
        let clone = status.clone();
        clone.error("shared");
        assert_eq!(status.lines().len(), 1);
    }
}
