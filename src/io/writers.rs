//! CSV writers for the two output tables.
//!
//! Both files get a header row even when there are no data rows, no index
//! column, `\n` line endings and quoting only where a field needs it.

use crate::errors::PipelineError;
use crate::pipeline::data::{ClassifiedReview, SentimentSummary};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::path::Path;

pub const REVIEW_HEADERS: [&str; 2] = ["review", "sentiment"];
pub const SUMMARY_HEADERS: [&str; 2] = ["sentiment", "count"];

/// Write the per-row results.
pub fn write_reviews(path: &Path, rows: &[ClassifiedReview]) -> Result<(), PipelineError> {
    write_records(path, &REVIEW_HEADERS, rows)
}

/// Write the label counts.
pub fn write_summary(path: &Path, summary: &SentimentSummary) -> Result<(), PipelineError> {
    write_records(path, &SUMMARY_HEADERS, &summary.entries)
}

/// Serialize `records` under an explicit header row.
pub fn write_records<T: Serialize>(
    path: &Path,
    headers: &[&str],
    records: &[T],
) -> Result<(), PipelineError> {
    let fail = |e: &dyn std::fmt::Display| {
        PipelineError::write(path, format!("Failed to write {}: {}", path.display(), e))
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(|e| fail(&e))?;

    writer.write_record(headers).map_err(|e| fail(&e))?;
    for record in records {
        writer.serialize(record).map_err(|e| fail(&e))?;
    }
    writer.flush().map_err(|e| fail(&e))?;

    log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::data::SentimentCount;
    use crate::sentiment::Sentiment;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_reviews_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("processed.csv");
        let rows = vec![
            ClassifiedReview {
                review: "this product is amazing".into(),
                sentiment: Sentiment::Positive,
            },
            ClassifiedReview {
                review: "meh, ok".into(),
                sentiment: Sentiment::Neutral,
            },
        ];

        write_reviews(&path, &rows).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "review,sentiment\nthis product is amazing,positive\n\"meh, ok\",neutral\n"
        );
    }

    #[test]
    fn test_write_summary_format() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("summary.csv");
        let summary = SentimentSummary {
            entries: vec![
                SentimentCount {
                    sentiment: Sentiment::Negative,
                    count: 2,
                },
                SentimentCount {
                    sentiment: Sentiment::Positive,
                    count: 1,
                },
            ],
        };

        write_summary(&path, &summary).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "sentiment,count\nnegative,2\npositive,1\n"
        );
    }

    #[test]
    fn test_header_written_for_empty_tables() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.csv");
        write_reviews(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "review,sentiment\n");
    }

    #[test]
    fn test_empty_review_is_written_as_empty_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blank.csv");
        let rows = vec![ClassifiedReview {
            review: String::new(),
            sentiment: Sentiment::Neutral,
        }];
        write_reviews(&path, &rows).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "review,sentiment\n,neutral\n"
        );
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no_such_dir").join("out.csv");
        let err = write_reviews(&path, &[]).unwrap_err();
        assert!(matches!(err, PipelineError::Write { .. }));
        assert!(err.to_string().contains("out.csv"));
    }
}
