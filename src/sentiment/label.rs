//! Sentiment labels and the rules that map a score onto them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default lower bound of the positive band for compound scores.
pub const DEFAULT_POSITIVE_THRESHOLD: f64 = 0.05;

/// Default upper bound of the negative band for compound scores.
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = -0.05;

/// Discrete sentiment polarity attached to every output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!("unknown sentiment label '{}'", other)),
        }
    }
}

/// Rule turning a continuous score into a [`Sentiment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelRule {
    /// Positive above zero, negative below zero, neutral at exactly zero.
    Sign,
    /// Positive at or above `positive`, negative at or below `negative`,
    /// neutral strictly in between.
    DeadZone { positive: f64, negative: f64 },
}

impl LabelRule {
    /// Dead-zone rule with the standard +/-0.05 compound thresholds.
    pub fn compound_default() -> Self {
        Self::DeadZone {
            positive: DEFAULT_POSITIVE_THRESHOLD,
            negative: DEFAULT_NEGATIVE_THRESHOLD,
        }
    }

    pub fn label(&self, score: f64) -> Sentiment {
        match *self {
            Self::Sign => {
                if score > 0.0 {
                    Sentiment::Positive
                } else if score < 0.0 {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
            Self::DeadZone { positive, negative } => {
                if score >= positive {
                    Sentiment::Positive
                } else if score <= negative {
                    Sentiment::Negative
                } else {
                    Sentiment::Neutral
                }
            }
        }
    }
}
