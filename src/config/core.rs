use serde::{Deserialize, Serialize};

use super::parallel::ParallelConfig;
use crate::errors::PipelineError;
use crate::pipeline::stages::clean::CleanOptions;
use crate::pipeline::stages::load::{LoaderOptions, DEFAULT_NULL_MARKERS};
use crate::sentiment::label::{DEFAULT_NEGATIVE_THRESHOLD, DEFAULT_POSITIVE_THRESHOLD};
use crate::sentiment::LabelRule;
use crate::text::NormalizeOptions;

/// Default name of the text column.
pub const DEFAULT_COLUMN: &str = "review";

/// Named bundle of defaults reproducing one historical pipeline variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Polarity scorer, sign rule, basic normalization, no column check,
    /// aborts on bad rows.
    Classic,
    /// Compound scorer, dead-zone rule, extended normalization, column
    /// check, per-row recovery.
    #[default]
    Robust,
}

/// Which scoring backend classifies the reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// VADER compound score with a dead-zone label rule
    Compound,
    /// AFINN comparative polarity with a sign label rule
    Polarity,
}

/// What to do when one row fails to normalize or score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowErrorPolicy {
    /// Substitute a safe value (empty text / neutral) and keep going
    Recover,
    /// Fail the whole batch
    Abort,
}

/// `[input]` section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSection {
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub delimiter: Option<String>,
    #[serde(default)]
    pub null_markers: Option<Vec<String>>,
}

/// `[normalize]` section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeSection {
    #[serde(default)]
    pub strip_digits: Option<bool>,
    #[serde(default)]
    pub collapse_whitespace: Option<bool>,
}

/// `[scorer]` section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerSection {
    #[serde(default)]
    pub kind: Option<ScorerKind>,
    #[serde(default)]
    pub positive_threshold: Option<f64>,
    #[serde(default)]
    pub negative_threshold: Option<f64>,
}

/// `[errors]` section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorsSection {
    #[serde(default)]
    pub row_policy: Option<RowErrorPolicy>,
    #[serde(default)]
    pub check_column: Option<bool>,
}

/// Root structure of `.review-sentiment.toml`.
///
/// Every value is optional; anything left out falls back to the profile
/// defaults when the file is resolved into a [`PipelineConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub input: Option<InputSection>,
    #[serde(default)]
    pub normalize: Option<NormalizeSection>,
    #[serde(default)]
    pub scorer: Option<ScorerSection>,
    #[serde(default)]
    pub errors: Option<ErrorsSection>,
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,
}

/// Scorer selection after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerOptions {
    pub kind: ScorerKind,
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl ScorerOptions {
    pub fn label_rule(&self) -> LabelRule {
        match self.kind {
            ScorerKind::Compound => LabelRule::DeadZone {
                positive: self.positive_threshold,
                negative: self.negative_threshold,
            },
            ScorerKind::Polarity => LabelRule::Sign,
        }
    }
}

/// Fully resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub profile: Profile,
    pub column: String,
    pub delimiter: u8,
    pub null_markers: Vec<String>,
    pub normalize: NormalizeOptions,
    pub scorer: ScorerOptions,
    pub row_policy: RowErrorPolicy,
    pub check_column: bool,
    pub parallel: ParallelConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

impl PipelineConfig {
    pub fn for_profile(profile: Profile) -> Self {
        let (normalize, kind, row_policy, check_column) = match profile {
            Profile::Classic => (
                NormalizeOptions::basic(),
                ScorerKind::Polarity,
                RowErrorPolicy::Abort,
                false,
            ),
            Profile::Robust => (
                NormalizeOptions::extended(),
                ScorerKind::Compound,
                RowErrorPolicy::Recover,
                true,
            ),
        };

        Self {
            profile,
            column: DEFAULT_COLUMN.to_string(),
            delimiter: b',',
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
            normalize,
            scorer: ScorerOptions {
                kind,
                positive_threshold: DEFAULT_POSITIVE_THRESHOLD,
                negative_threshold: DEFAULT_NEGATIVE_THRESHOLD,
            },
            row_policy,
            check_column,
            parallel: ParallelConfig::default(),
        }
    }

    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            delimiter: self.delimiter,
            null_markers: self.null_markers.clone(),
        }
    }

    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            column: self.column.clone(),
            check_column: self.check_column,
        }
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.column.is_empty() {
            return Err(PipelineError::config("input column name must not be empty"));
        }
        let (pos, neg) = (
            self.scorer.positive_threshold,
            self.scorer.negative_threshold,
        );
        if !pos.is_finite() || !neg.is_finite() {
            return Err(PipelineError::config("score thresholds must be finite"));
        }
        if pos < neg {
            return Err(PipelineError::config(format!(
                "positive_threshold ({}) must not be below negative_threshold ({})",
                pos, neg
            )));
        }
        Ok(())
    }
}

fn parse_delimiter(value: &str) -> Result<u8, PipelineError> {
    let value = if value == "\\t" { "\t" } else { value };
    match value.as_bytes() {
        [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
        _ => Err(PipelineError::config(format!(
            "delimiter must be a single ASCII character, got '{}'",
            value
        ))),
    }
}

impl ConfigFile {
    /// Resolve into concrete settings. `profile_override` (from the command
    /// line) beats the file's `profile`; explicit file values beat profile
    /// defaults.
    pub fn resolve(
        &self,
        profile_override: Option<Profile>,
    ) -> Result<PipelineConfig, PipelineError> {
        let profile = profile_override.or(self.profile).unwrap_or_default();
        let mut config = PipelineConfig::for_profile(profile);

        if let Some(input) = &self.input {
            if let Some(column) = &input.column {
                config.column = column.clone();
            }
            if let Some(delimiter) = &input.delimiter {
                config.delimiter = parse_delimiter(delimiter)?;
            }
            if let Some(markers) = &input.null_markers {
                config.null_markers = markers.clone();
            }
        }

        if let Some(normalize) = &self.normalize {
            if let Some(strip) = normalize.strip_digits {
                config.normalize.strip_digits = strip;
            }
            if let Some(collapse) = normalize.collapse_whitespace {
                config.normalize.collapse_whitespace = collapse;
            }
        }

        if let Some(scorer) = &self.scorer {
            if let Some(kind) = scorer.kind {
                config.scorer.kind = kind;
            }
            if let Some(pos) = scorer.positive_threshold {
                config.scorer.positive_threshold = pos;
            }
            if let Some(neg) = scorer.negative_threshold {
                config.scorer.negative_threshold = neg;
            }
        }

        if let Some(errors) = &self.errors {
            if let Some(policy) = errors.row_policy {
                config.row_policy = policy;
            }
            if let Some(check) = errors.check_column {
                config.check_column = check;
            }
        }

        if let Some(parallel) = &self.parallel {
            config.parallel = parallel.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
