//! Row-wise mapping shared by the normalize and classify stages.

use crate::config::RowErrorPolicy;
use crate::errors::{PipelineError, RowError};
use crate::observability::{increment_processed, set_current_row, set_progress};
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Map `f` over `items`, in parallel when `parallel` is set.
///
/// The output keeps input order in both modes.
pub fn map_rows<T, U, F>(items: &[T], parallel: bool, progress: &ProgressBar, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(usize, &T) -> U + Sync + Send,
{
    set_progress(0, items.len());
    let run = |(index, item): (usize, &T)| {
        let _row = set_current_row(index);
        let out = f(index, item);
        increment_processed();
        progress.inc(1);
        out
    };

    if parallel {
        items.par_iter().enumerate().map(run).collect()
    } else {
        items.iter().enumerate().map(run).collect()
    }
}

/// Outcome of applying the row error policy to a batch.
pub struct Resolved<U> {
    pub values: Vec<U>,
    pub recovered: usize,
}

/// Apply `policy` to per-row results.
///
/// `Recover` substitutes `fallback` for each failed row and logs it; `Abort`
/// returns the first failure in row order.
pub fn resolve_rows<U>(
    results: Vec<Result<U, RowError>>,
    policy: RowErrorPolicy,
    fallback: impl Fn() -> U,
) -> Result<Resolved<U>, PipelineError> {
    let mut values = Vec::with_capacity(results.len());
    let mut recovered = 0;

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => values.push(value),
            Err(source) => match policy {
                RowErrorPolicy::Recover => {
                    log::warn!("Row {}: {}; substituting a default value", index, source);
                    recovered += 1;
                    values.push(fallback());
                }
                RowErrorPolicy::Abort => return Err(PipelineError::Row { index, source }),
            },
        }
    }

    Ok(Resolved { values, recovered })
}
