//! Sentiment classification for product reviews stored in CSV files.
//!
//! A run loads a CSV file, drops incomplete rows, keeps the `review` column,
//! normalizes the text, labels each review positive, negative or neutral,
//! counts the labels and writes two CSV files. See [`pipeline::run`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod observability;
pub mod pipeline;
pub mod sentiment;
pub mod text;

pub use crate::config::{PipelineConfig, Profile};
pub use crate::errors::{ErrorCategory, PipelineError};
pub use crate::pipeline::{run, run_with_config, RunOutcome, RunRequest};
pub use crate::sentiment::{Classify, Sentiment, SentimentScorer};
