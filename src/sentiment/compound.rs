//! VADER compound scorer.

use super::scorer::SentimentScorer;
use crate::errors::ScoreError;
use vader_sentiment::SentimentIntensityAnalyzer;

const NAME: &str = "compound";

/// Lexicon and rule based scorer returning the VADER compound score.
///
/// The compound value is a normalized sum of valence scores and always lies in
/// `[-1, 1]`. Pair it with [`LabelRule::compound_default`] for the usual
/// +/-0.05 dead zone.
///
/// [`LabelRule::compound_default`]: super::label::LabelRule::compound_default
pub struct CompoundScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl CompoundScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for CompoundScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for CompoundScorer {
    fn name(&self) -> &str {
        NAME
    }

    fn score(&self, text: &str) -> Result<f64, ScoreError> {
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .ok_or_else(|| ScoreError::Unavailable {
                scorer: NAME.to_string(),
                message: "no compound value in scorer output".to_string(),
            })
    }

    fn prepare(&self) -> Result<(), ScoreError> {
        // The lexicon is parsed lazily on first use.
        self.score("good").map(|_| ()).map_err(|e| ScoreError::Unavailable {
            scorer: NAME.to_string(),
            message: e.to_string(),
        })
    }
}
