//! The review sentiment pipeline.
//!
//! Five stages run strictly in sequence, each consuming the full output of
//! the previous one:
//!
//! 1. load: CSV file into a [`RowTable`](data::RowTable)
//! 2. clean: drop incomplete rows, project onto the text column
//! 3. normalize: lowercase and strip characters, per row
//! 4. classify: score and label, per row
//! 5. summarize: count labels
//!
//! [`runner::run`] wires the stages together and writes the two output files.

pub mod builder;
pub mod data;
pub mod runner;
pub mod stage;
pub mod stages;

pub use builder::{BuiltPipeline, PipelineBuilder, StageTiming};
pub use data::{
    Cell, ClassifiedReview, PipelineReport, RawReview, RowTable, RunStats, SentimentCount,
    SentimentSummary,
};
pub use runner::{
    run, run_with_config, RunOutcome, RunRequest, EXIT_FAILED, EXIT_HALTED, EXIT_OK,
    EXIT_WRITE_FAILED,
};
pub use stage::{infallible, Stage, StageFn};
