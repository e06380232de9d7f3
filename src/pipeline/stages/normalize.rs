//! Normalization stage.

use super::rows::{map_rows, resolve_rows};
use crate::config::RowErrorPolicy;
use crate::errors::{PipelineError, RowError};
use crate::pipeline::data::{CleanedReviews, NormalizedReviews, RunStats};
use crate::text::{normalize, NormalizeOptions};
use indicatif::ProgressBar;

/// Settings for the per-row stages.
#[derive(Clone)]
pub struct RowStageOptions {
    pub policy: RowErrorPolicy,
    pub parallel: bool,
    pub progress: ProgressBar,
}

impl RowStageOptions {
    pub fn sequential(policy: RowErrorPolicy) -> Self {
        Self {
            policy,
            parallel: false,
            progress: ProgressBar::hidden(),
        }
    }
}

/// Normalize every review. Non-text cells follow the row error policy and
/// become the empty string when recovered.
pub fn normalize_reviews(
    cleaned: CleanedReviews,
    options: &NormalizeOptions,
    stage: &RowStageOptions,
) -> Result<NormalizedReviews, PipelineError> {
    let results = map_rows(&cleaned.reviews, stage.parallel, &ProgressBar::hidden(), |_, raw| {
        normalize(&raw.bytes, options).map_err(RowError::from)
    });
    let resolved = resolve_rows(results, stage.policy, String::new)?;

    Ok(NormalizedReviews {
        texts: resolved.values,
        stats: RunStats {
            rows_loaded: cleaned.rows_loaded,
            rows_dropped: cleaned.rows_dropped(),
            normalize_recovered: resolved.recovered,
            score_recovered: 0,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::data::RawReview;

    fn cleaned(reviews: Vec<RawReview>) -> CleanedReviews {
        let rows_loaded = reviews.len() + 1;
        CleanedReviews {
            reviews,
            rows_loaded,
        }
    }

    #[test]
    fn test_normalizes_in_order() {
        let input = cleaned(vec![
            RawReview::from("GREAT!!"),
            RawReview::from("Bad, 2/10"),
        ]);
        let out = normalize_reviews(
            input,
            &NormalizeOptions::extended(),
            &RowStageOptions::sequential(RowErrorPolicy::Recover),
        )
        .unwrap();
        assert_eq!(out.texts, vec!["great", "bad"]);
        assert_eq!(out.stats.rows_loaded, 3);
        assert_eq!(out.stats.rows_dropped, 1);
    }

    #[test]
    fn test_non_text_recovered_as_empty() {
        let input = cleaned(vec![
            RawReview {
                bytes: vec![0xff, 0xfe],
            },
            RawReview::from("ok"),
        ]);
        let out = normalize_reviews(
            input,
            &NormalizeOptions::extended(),
            &RowStageOptions::sequential(RowErrorPolicy::Recover),
        )
        .unwrap();
        assert_eq!(out.texts, vec!["", "ok"]);
        assert_eq!(out.stats.normalize_recovered, 1);
    }

    #[test]
    fn test_non_text_aborts_under_abort_policy() {
        let input = cleaned(vec![RawReview {
            bytes: vec![0xff],
        }]);
        let err = normalize_reviews(
            input,
            &NormalizeOptions::basic(),
            &RowStageOptions::sequential(RowErrorPolicy::Abort),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Row {
                index: 0,
                source: RowError::Normalize(_)
            }
        ));
    }
}
