//! Input/output helpers at the edges of the pipeline.

pub mod report;
pub mod status;
pub mod writers;

pub use report::{render_json, render_terminal, RunReport};
pub use status::{ConsoleStatus, MemoryStatus, StatusSink};
pub use writers::{write_records, write_reviews, write_summary};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
