//! Sentiment scoring and labelling.
//!
//! The pipeline only sees the [`Classify`] trait. Concrete scorers are chosen
//! from configuration by [`build_classifier`], or injected directly in tests.

pub mod compound;
pub mod label;
pub mod polarity;
pub mod scorer;

pub use compound::CompoundScorer;
pub use label::{LabelRule, Sentiment};
pub use polarity::PolarityScorer;
pub use scorer::{Classify, SentimentScorer, ThresholdClassifier};

use crate::config::{ScorerKind, ScorerOptions};

/// Build the classifier described by `options`.
pub fn build_classifier(options: &ScorerOptions) -> Box<dyn Classify> {
    let rule = options.label_rule();
    let classifier: Box<dyn Classify> = match options.kind {
        ScorerKind::Compound => Box::new(ThresholdClassifier::new(CompoundScorer::new(), rule)),
        ScorerKind::Polarity => Box::new(ThresholdClassifier::new(PolarityScorer::new(), rule)),
    };
    log::debug!("Using {:?} scorer with {:?}", options.kind, rule);
    classifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PipelineConfig, Profile};

    #[test]
    fn test_build_classifier_for_profiles() {
        let robust = build_classifier(&PipelineConfig::for_profile(Profile::Robust).scorer);
        assert_eq!(robust.classify("this product is amazing"), Ok(Sentiment::Positive));

        let classic = build_classifier(&PipelineConfig::for_profile(Profile::Classic).scorer);
        assert_eq!(classic.classify("this product is amazing 1010"), Ok(Sentiment::Positive));
        assert_eq!(classic.classify("the parcel came on tuesday"), Ok(Sentiment::Neutral));
    }
}
