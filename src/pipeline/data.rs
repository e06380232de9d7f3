//! Data structures flowing through the review pipeline.
//!
//! 1. Loading → [`RowTable`] with every original column
//! 2. Cleaning → [`CleanedReviews`], one surviving text cell per row
//! 3. Normalization → [`NormalizedReviews`]
//! 4. Classification → [`ClassifiedReviews`]
//! 5. Summarizing → [`PipelineReport`]
//!
//! Row order is preserved by every stage.

use crate::sentiment::Sentiment;
use serde::Serialize;

/// A single CSV field; `None` marks a missing value.
pub type Cell = Option<Vec<u8>>;

/// In-memory CSV table. Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RowTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Text cell that survived cleaning, still undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReview {
    pub bytes: Vec<u8>,
}

impl From<&str> for RawReview {
    fn from(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// Output of the cleaning stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedReviews {
    pub reviews: Vec<RawReview>,
    pub rows_loaded: usize,
}

impl CleanedReviews {
    pub fn rows_dropped(&self) -> usize {
        self.rows_loaded - self.reviews.len()
    }
}

/// Output of the normalization stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedReviews {
    pub texts: Vec<String>,
    pub stats: RunStats,
}

/// One row of the processed output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedReview {
    pub review: String,
    pub sentiment: Sentiment,
}

/// Output of the classification stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedReviews {
    pub rows: Vec<ClassifiedReview>,
    pub stats: RunStats,
}

/// One row of the summary output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Label counts over the processed rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub entries: Vec<SentimentCount>,
}

impl SentimentSummary {
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.entries
            .iter()
            .find(|e| e.sentiment == sentiment)
            .map_or(0, |e| e.count)
    }
}

/// Row accounting for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub rows_loaded: usize,
    pub rows_dropped: usize,
    pub normalize_recovered: usize,
    pub score_recovered: usize,
}

/// Final result of the in-memory part of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub rows: Vec<ClassifiedReview>,
    pub summary: SentimentSummary,
    pub stats: RunStats,
}
