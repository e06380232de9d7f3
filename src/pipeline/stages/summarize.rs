//! Summary stage: label counts over the classified rows.

use crate::pipeline::data::{
    ClassifiedReview, ClassifiedReviews, PipelineReport, SentimentCount, SentimentSummary,
};

/// Count rows per label.
///
/// Entries are ordered by count, highest first; equal counts keep the order
/// in which the labels first appear in `rows`.
pub fn summarize(rows: &[ClassifiedReview]) -> SentimentSummary {
    let mut entries: Vec<SentimentCount> = Vec::new();
    for row in rows {
        match entries.iter_mut().find(|e| e.sentiment == row.sentiment) {
            Some(entry) => entry.count += 1,
            None => entries.push(SentimentCount {
                sentiment: row.sentiment,
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-seen order among ties.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    SentimentSummary { entries }
}

pub fn build_report(classified: ClassifiedReviews) -> PipelineReport {
    let summary = summarize(&classified.rows);
    PipelineReport {
        rows: classified.rows,
        summary,
        stats: classified.stats,
    }
}
