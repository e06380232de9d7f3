//! AFINN word-list polarity scorer.

use super::scorer::SentimentScorer;
use crate::errors::ScoreError;

const NAME: &str = "polarity";

/// Scores text with the AFINN-165 word list.
///
/// The score is the `comparative` value: the summed word valences divided by
/// the number of tokens. Its sign is the sentiment direction, so it pairs with
/// [`LabelRule::Sign`](super::label::LabelRule::Sign). Text without any
/// listed word scores exactly `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityScorer;

impl PolarityScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for PolarityScorer {
    fn name(&self) -> &str {
        NAME
    }

    fn score(&self, text: &str) -> Result<f64, ScoreError> {
        // No tokens means nothing to average over.
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        let analysis = ::sentiment::analyze(text.to_string());
        log::trace!(
            "AFINN score {} ({} comparative) for {:?}",
            analysis.score,
            analysis.comparative,
            text
        );
        Ok(f64::from(analysis.comparative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        PolarityScorer::new().score(text).unwrap()
    }

    #[test]
    fn test_positive_and_negative_words() {
        assert!(score("this product is amazing") > 0.0);
        assert!(score("i love it") > 0.0);
        assert!(score("this product is terrible") < 0.0);
        assert!(score("i hate it") < 0.0);
    }

    #[test]
    fn test_unlisted_words_score_zero() {
        assert_eq!(score("the parcel came on tuesday"), 0.0);
    }

    #[test]
    fn test_blank_text_scores_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
    }

    #[test]
    fn test_opposite_words_cancel() {
        // good +3, bad -3
        assert_eq!(score("good bad"), 0.0);
    }

    #[test]
    fn test_score_is_finite_for_review_text() {
        for text in ["great value works perfectly 1010", "broke after 2 days", "ok"] {
            assert!(score(text).is_finite(), "{}", text);
        }
    }
}
