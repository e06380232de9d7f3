//! Error types for the review sentiment pipeline.
//!
//! Every expected failure of a run is a [`PipelineError`] value returned from
//! the stage that detected it. Nothing in the pipeline panics for a missing
//! file, a missing column or a bad row; the runner turns these values into a
//! printed diagnostic and an exit code.
//!
//! # Categories
//!
//! - `Input`: the input file is missing, empty, unreadable or not CSV
//! - `Schema`: the text column cannot be found or projected
//! - `Row`: a single row failed to normalize or score under the abort policy
//! - `Output`: an output file could not be written
//! - `Setup`: configuration or scorer preparation failed
//!
//! # Example
//!
//! ```rust
//! use review_sentiment::errors::{ErrorCategory, PipelineError};
//!
//! let err = PipelineError::MissingColumn { column: "review".into() };
//! assert_eq!(err.category(), ErrorCategory::Schema);
//! assert!(err.is_graceful_halt());
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a raw cell into normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The cell does not hold valid UTF-8 text.
    #[error("value is not text (invalid UTF-8 at byte {valid_up_to})")]
    NotText { valid_up_to: usize },
}

/// Failure reported by a sentiment scorer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// The scoring library panicked while handling the text.
    #[error("scorer '{scorer}' panicked: {message}")]
    Panicked { scorer: String, message: String },

    /// The scorer produced NaN or an infinite value.
    #[error("scorer '{scorer}' returned a non-finite score ({value})")]
    NonFinite { scorer: String, value: f64 },

    /// The scorer's resources could not be prepared.
    #[error("scorer '{scorer}' is unavailable: {message}")]
    Unavailable { scorer: String, message: String },
}

/// A per-row failure, either from normalization or scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("classification failed: {0}")]
    Score(#[from] ScoreError),
}

/// Broad grouping of pipeline errors, used for exit codes and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Input,
    Schema,
    Row,
    Output,
    Setup,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Schema => write!(f, "schema"),
            Self::Row => write!(f, "row"),
            Self::Output => write!(f, "output"),
            Self::Setup => write!(f, "setup"),
        }
    }
}

/// Unified error type for pipeline stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("The file at {} was not found.", path.display())]
    InputNotFound { path: PathBuf },

    #[error("The file is empty.")]
    EmptyInput { path: PathBuf },

    #[error("The file could not be parsed. ({reason})")]
    Unparsable { path: PathBuf, reason: String },

    #[error("The file at {} could not be read: {message}", path.display())]
    InputUnreadable { path: PathBuf, message: String },

    #[error("Required column '{column}' not found in the data.")]
    MissingColumn { column: String },

    /// Projection onto the text column failed after the null filter ran.
    ///
    /// Only reachable when the up-front column check is disabled.
    #[error("None of ['{column}'] are in the columns {available:?}")]
    ProjectionFailed {
        column: String,
        available: Vec<String>,
    },

    #[error("Row {index}: {source}")]
    Row {
        index: usize,
        #[source]
        source: RowError,
    },

    #[error("{message}")]
    Write { path: PathBuf, message: String },

    #[error("Scorer setup failed: {0}")]
    Scorer(ScoreError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Type mismatch in pipeline stage '{stage}'")]
    StageMismatch { stage: String },
}

impl PipelineError {
    pub fn unparsable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Unparsable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Map an I/O error from opening the input file to the matching variant.
    pub fn from_input_io(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::InputNotFound { path },
            _ => Self::InputUnreadable {
                path,
                message: error.to_string(),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. }
            | Self::EmptyInput { .. }
            | Self::Unparsable { .. }
            | Self::InputUnreadable { .. } => ErrorCategory::Input,
            Self::MissingColumn { .. } | Self::ProjectionFailed { .. } => ErrorCategory::Schema,
            Self::Row { .. } => ErrorCategory::Row,
            Self::Write { .. } => ErrorCategory::Output,
            Self::Scorer(_) | Self::Config(_) | Self::StageMismatch { .. } => ErrorCategory::Setup,
        }
    }

    /// Whether the run stopped on an anticipated condition rather than a
    /// hard failure.
    ///
    /// Input and reported schema errors halt the run without crashing.
    /// A failed projection, an aborted row or a broken scorer is a hard
    /// failure.
    pub fn is_graceful_halt(&self) -> bool {
        match self {
            Self::ProjectionFailed { .. } => false,
            other => matches!(
                other.category(),
                ErrorCategory::Input | ErrorCategory::Schema
            ),
        }
    }
}
