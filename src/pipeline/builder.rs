//! Pipeline builder for composing review stages.
//!
//! This module provides a type-safe fluent API for building the pipeline.

use super::stage::{AnyStage, Stage};
use crate::errors::PipelineError;
use serde::Serialize;
use std::any::Any;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Builder for constructing pipelines.
///
/// The builder uses phantom types to track the output type of the pipeline
/// at compile time, enabling type-safe composition.
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = PipelineBuilder::new()
///     .stage(load)       // Output: RowTable
///     .stage(clean)      // Input: RowTable, Output: CleanedReviews
///     .stage(normalize)  // Input: CleanedReviews, Output: NormalizedReviews
///     .build();
/// ```
pub struct PipelineBuilder<T> {
    stages: Vec<Box<dyn AnyStage>>,
    _phantom: PhantomData<T>,
}

impl PipelineBuilder<()> {
    /// Create a new empty pipeline builder.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            _phantom: PhantomData,
        }
    }
}

impl Default for PipelineBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PipelineBuilder<T> {
    /// Add a stage to the pipeline.
    ///
    /// The stage's input type must match the current pipeline output type.
    /// Returns a new builder with the stage's output type.
    pub fn stage<S>(mut self, stage: S) -> PipelineBuilder<S::Output>
    where
        S: Stage<Input = T> + 'static,
        T: 'static,
        S::Output: 'static,
    {
        self.stages.push(Box::new(stage));
        PipelineBuilder {
            stages: self.stages,
            _phantom: PhantomData,
        }
    }

    /// Build the final pipeline ready for execution.
    pub fn build(self) -> BuiltPipeline<T> {
        BuiltPipeline {
            stages: self.stages,
            _phantom: PhantomData,
        }
    }
}

/// A built pipeline ready for execution.
pub struct BuiltPipeline<T> {
    stages: Vec<Box<dyn AnyStage>>,
    _phantom: PhantomData<T>,
}

impl<T: 'static> BuiltPipeline<T> {
    /// Thread `()` through every stage in order and time each one.
    ///
    /// The first failing stage's error is returned unchanged.
    pub fn execute(&self) -> Result<(T, Vec<StageTiming>), PipelineError> {
        let mut data: Box<dyn Any> = Box::new(());
        let mut timings = Vec::with_capacity(self.stages.len());

        for (i, stage) in self.stages.iter().enumerate() {
            let start = Instant::now();
            log::info!("Stage {}/{}: {}", i + 1, self.stages.len(), stage.name());

            data = stage.run_any(data).map_err(|e| {
                log::debug!("Stage '{}' failed: {}", stage.name(), e);
                e
            })?;

            let timing = StageTiming {
                name: stage.name().to_string(),
                duration: start.elapsed(),
            };
            log::debug!("{}", timing.format());
            timings.push(timing);
        }

        let result = data
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| PipelineError::StageMismatch {
                stage: "output".to_string(),
            })?;

        Ok((result, timings))
    }
}

/// Timing information for a pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageTiming {
    /// Name of the stage
    pub name: String,

    /// Time taken to execute the stage
    pub duration: Duration,
}

impl StageTiming {
    /// Format the timing as a human-readable string.
    pub fn format(&self) -> String {
        format!("{}: {:.3}s", self.name, self.duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::data::{RawReview, RowTable};
    use crate::pipeline::stage::{infallible, StageFn};

    fn header_only() -> RowTable {
        RowTable::new(vec!["review".to_string()])
    }

    #[test]
    fn test_stages_run_in_order() {
        let pipeline = PipelineBuilder::new()
            .stage(infallible("load", |()| {
                let mut table = header_only();
                table.rows.push(vec![Some(b"Great".to_vec())]);
                table
            }))
            .stage(infallible("project", |table: RowTable| {
                table
                    .rows
                    .into_iter()
                    .filter_map(|mut row| row.remove(0))
                    .map(|bytes| RawReview { bytes })
                    .collect::<Vec<_>>()
            }))
            .stage(infallible("count", |reviews: Vec<RawReview>| reviews.len()))
            .build();

        let (count, timings) = pipeline.execute().unwrap();

        assert_eq!(count, 1);
        let names: Vec<_> = timings.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["load", "project", "count"]);
    }

    #[test]
    fn test_pipeline_stops_at_first_error() {
        let pipeline = PipelineBuilder::new()
            .stage(StageFn::new("load", |()| {
                Err::<RowTable, _>(PipelineError::EmptyInput {
                    path: "empty.csv".into(),
                })
            }))
            .stage(infallible("clean", |_: RowTable| -> usize {
                panic!("must not run after a failed stage")
            }))
            .build();

        assert!(matches!(
            pipeline.execute(),
            Err(PipelineError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_timing_format() {
        let timing = StageTiming {
            name: "classify".to_string(),
            duration: Duration::from_millis(1500),
        };
        assert_eq!(timing.format(), "classify: 1.500s");
    }
}
