//! Cleaning stage: drop incomplete rows, keep only the text column.

use crate::errors::PipelineError;
use crate::pipeline::data::{CleanedReviews, RawReview, RowTable};

/// Options for the cleaning stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Name of the text column (exact, case-sensitive).
    pub column: String,
    /// Report a missing column before doing any work. When false, the null
    /// filter runs first and projection then fails hard.
    pub check_column: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            column: crate::config::DEFAULT_COLUMN.to_string(),
            check_column: true,
        }
    }
}

/// Drop every row with a missing value in any column, then project onto the
/// text column.
///
/// Rows are filtered before projection, so a missing value in a column that
/// is about to be discarded still removes the row.
pub fn clean_table(
    table: RowTable,
    options: &CleanOptions,
) -> Result<CleanedReviews, PipelineError> {
    if options.check_column && table.column_index(&options.column).is_none() {
        return Err(PipelineError::MissingColumn {
            column: options.column.clone(),
        });
    }

    let rows_loaded = table.len();
    let complete = drop_incomplete_rows(table);
    let dropped = rows_loaded - complete.len();
    if dropped > 0 {
        log::info!("Dropped {} of {} rows with missing values", dropped, rows_loaded);
    }

    let reviews = project(complete, &options.column)?;
    Ok(CleanedReviews {
        reviews,
        rows_loaded,
    })
}

fn drop_incomplete_rows(mut table: RowTable) -> RowTable {
    table.rows.retain(|row| row.iter().all(Option::is_some));
    table
}

fn project(table: RowTable, column: &str) -> Result<Vec<RawReview>, PipelineError> {
    let index = table
        .column_index(column)
        .ok_or_else(|| PipelineError::ProjectionFailed {
            column: column.to_string(),
            available: table.headers.clone(),
        })?;

    Ok(table
        .rows
        .into_iter()
        .filter_map(|mut row| row.swap_remove(index))
        .map(|bytes| RawReview { bytes })
        .collect())
}
