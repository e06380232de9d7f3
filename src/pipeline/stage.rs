//! Named steps of the review pipeline.
//!
//! Load, clean, normalize, classify and summarize are each a [`Stage`] from
//! one boundary type in [`data`](super::data) to the next. Every stage fails
//! with [`PipelineError`], so the builder can chain them without converting
//! errors and the runner sees the original variant.

use crate::errors::PipelineError;
use std::any::Any;
use std::marker::PhantomData;

/// One step of the pipeline.
pub trait Stage: Send + Sync {
    type Input;
    type Output;

    /// Name used in logs and stage timings.
    fn name(&self) -> &str;

    fn run(&self, input: Self::Input) -> Result<Self::Output, PipelineError>;
}

/// A stage backed by a closure.
///
/// ```rust,ignore
/// let clean = StageFn::new("clean", move |table: RowTable| clean_table(table, &options));
/// ```
pub struct StageFn<F, I, O> {
    name: &'static str,
    func: F,
    _io: PhantomData<fn(I) -> O>,
}

impl<F, I, O> StageFn<F, I, O>
where
    F: Fn(I) -> Result<O, PipelineError> + Send + Sync,
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self {
            name,
            func,
            _io: PhantomData,
        }
    }
}

impl<F, I, O> Stage for StageFn<F, I, O>
where
    F: Fn(I) -> Result<O, PipelineError> + Send + Sync,
{
    type Input = I;
    type Output = O;

    fn name(&self) -> &str {
        self.name
    }

    fn run(&self, input: I) -> Result<O, PipelineError> {
        (self.func)(input)
    }
}

/// A stage for a step that cannot fail, such as summarizing.
pub fn infallible<I, O>(
    name: &'static str,
    func: impl Fn(I) -> O + Send + Sync,
) -> StageFn<impl Fn(I) -> Result<O, PipelineError> + Send + Sync, I, O> {
    StageFn::new(name, move |input| Ok(func(input)))
}

/// Object-safe view of a stage with its types erased, so the builder can keep
/// a heterogeneous chain in one `Vec`.
pub(crate) trait AnyStage: Send + Sync {
    fn name(&self) -> &str;

    fn run_any(&self, input: Box<dyn Any>) -> Result<Box<dyn Any>, PipelineError>;
}

impl<S> AnyStage for S
where
    S: Stage,
    S::Input: 'static,
    S::Output: 'static,
{
    fn name(&self) -> &str {
        Stage::name(self)
    }

    fn run_any(&self, input: Box<dyn Any>) -> Result<Box<dyn Any>, PipelineError> {
        let input = input
            .downcast::<S::Input>()
            .map_err(|_| PipelineError::StageMismatch {
                stage: Stage::name(self).to_string(),
            })?;
        let output = self.run(*input)?;
        Ok(Box::new(output))
    }
}
