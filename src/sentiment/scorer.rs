//! Scoring and classification traits.
//!
//! A [`SentimentScorer`] is the external polarity capability: text in, number
//! out. A [`Classify`] strategy is what the pipeline actually calls: text in,
//! label out. [`ThresholdClassifier`] joins the two with a [`LabelRule`].

use super::label::{LabelRule, Sentiment};
use crate::errors::ScoreError;
use crate::observability::contain_panics;
use std::panic::{self, AssertUnwindSafe};

/// A polarity scoring capability.
///
/// Implementations must be stateless across calls, so one instance can be
/// constructed up front and shared by every row (and every worker thread).
pub trait SentimentScorer: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Score `text`; the sign gives the direction, the magnitude the strength.
    fn score(&self, text: &str) -> Result<f64, ScoreError>;

    /// Make sure any resources the scorer depends on are loaded.
    ///
    /// Called once before the first row is scored.
    fn prepare(&self) -> Result<(), ScoreError> {
        Ok(())
    }
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, text: &str) -> Result<f64, ScoreError> {
        (**self).score(text)
    }

    fn prepare(&self) -> Result<(), ScoreError> {
        (**self).prepare()
    }
}

/// Strategy mapping normalized text to a sentiment label.
pub trait Classify: Send + Sync {
    fn classify(&self, text: &str) -> Result<Sentiment, ScoreError>;

    /// Identifier used when a failure is reported.
    fn name(&self) -> &str {
        "classifier"
    }

    /// Forwarded to the underlying scorer, if any.
    fn prepare(&self) -> Result<(), ScoreError> {
        Ok(())
    }
}

/// Classifier that scores text and applies a fixed [`LabelRule`].
///
/// A panic inside the scorer is caught and reported as
/// [`ScoreError::Panicked`], so the row error policy decides what happens.
pub struct ThresholdClassifier<S> {
    scorer: S,
    rule: LabelRule,
}

impl<S: SentimentScorer> ThresholdClassifier<S> {
    pub fn new(scorer: S, rule: LabelRule) -> Self {
        Self { scorer, rule }
    }
}

impl<S: SentimentScorer> Classify for ThresholdClassifier<S> {
    fn classify(&self, text: &str) -> Result<Sentiment, ScoreError> {
        let score = catch_scorer_panic(self.scorer.name(), || self.scorer.score(text))??;
        if !score.is_finite() {
            return Err(ScoreError::NonFinite {
                scorer: self.scorer.name().to_string(),
                value: score,
            });
        }
        Ok(self.rule.label(score))
    }

    fn name(&self) -> &str {
        self.scorer.name()
    }

    fn prepare(&self) -> Result<(), ScoreError> {
        catch_scorer_panic(self.scorer.name(), || self.scorer.prepare())?
    }
}

/// Run `f`, turning a panic inside a scorer into a [`ScoreError`].
pub(crate) fn catch_scorer_panic<T>(scorer: &str, f: impl FnOnce() -> T) -> Result<T, ScoreError> {
    let _contained = contain_panics();
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| ScoreError::Panicked {
        scorer: scorer.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
