//! Classification stage.

use super::normalize::RowStageOptions;
use super::rows::{map_rows, resolve_rows};
use crate::errors::{PipelineError, RowError};
use crate::pipeline::data::{ClassifiedReview, ClassifiedReviews, NormalizedReviews};
use crate::sentiment::scorer::catch_scorer_panic;
use crate::sentiment::{Classify, Sentiment};

/// Label every normalized review. Scorer failures, panics included, follow
/// the row error policy and become `neutral` when recovered.
pub fn classify_reviews(
    normalized: NormalizedReviews,
    classifier: &dyn Classify,
    stage: &RowStageOptions,
) -> Result<ClassifiedReviews, PipelineError> {
    stage.progress.set_length(normalized.texts.len() as u64);
    let results = map_rows(&normalized.texts, stage.parallel, &stage.progress, |_, text| {
        catch_scorer_panic(classifier.name(), || classifier.classify(text))
            .and_then(|label| label)
            .map_err(RowError::from)
    });
    stage.progress.finish_and_clear();

    let resolved = resolve_rows(results, stage.policy, || Sentiment::Neutral)?;

    let rows = normalized
        .texts
        .into_iter()
        .zip(resolved.values)
        .map(|(review, sentiment)| ClassifiedReview { review, sentiment })
        .collect();

    let mut stats = normalized.stats;
    stats.score_recovered = resolved.recovered;
    Ok(ClassifiedReviews { rows, stats })
}
