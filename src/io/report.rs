//! End-of-run report for the terminal or as JSON.

use crate::pipeline::{RunOutcome, RunRequest, RunStats, SentimentCount};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

/// Serializable view of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub status: &'static str,
    pub exit_code: i32,
    pub input: String,
    pub output: String,
    pub summary_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub write_errors: Vec<String>,
    pub rows: usize,
    pub summary: Vec<SentimentCount>,
    pub stats: RunStats,
    pub timings_ms: Vec<StageMillis>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageMillis {
    pub stage: String,
    pub ms: f64,
}

impl RunReport {
    pub fn new(request: &RunRequest, outcome: &RunOutcome) -> Self {
        let status = match (&outcome.error, outcome.write_errors.is_empty()) {
            (Some(e), _) if e.is_graceful_halt() => "halted",
            (Some(_), _) => "failed",
            (None, false) => "partial",
            (None, true) => "completed",
        };
        let (rows, summary, stats) = match &outcome.report {
            Some(r) => (r.rows.len(), r.summary.entries.clone(), r.stats),
            None => (0, Vec::new(), RunStats::default()),
        };

        Self {
            status,
            exit_code: outcome.exit_code(),
            input: request.input.display().to_string(),
            output: request.output.display().to_string(),
            summary_file: request.summary.display().to_string(),
            error: outcome.error.as_ref().map(|e| e.to_string()),
            write_errors: outcome.write_errors.iter().map(|e| e.to_string()).collect(),
            rows,
            summary,
            stats,
            timings_ms: outcome
                .timings
                .iter()
                .map(|t| StageMillis {
                    stage: t.name.clone(),
                    ms: t.duration.as_secs_f64() * 1000.0,
                })
                .collect(),
        }
    }
}

pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_terminal(report: &RunReport, color: bool) -> String {
    let mut out = String::new();

    let headline = format!("Sentiment run {}", report.status);
    let headline = match (color, report.exit_code) {
        (false, _) => headline,
        (true, 0) => headline.green().bold().to_string(),
        (true, _) => headline.red().bold().to_string(),
    };
    out.push_str(&headline);
    out.push('\n');

    if report.rows > 0 || report.status == "completed" || report.status == "partial" {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["sentiment", "count", "share"]);
        for entry in &report.summary {
            let share = if report.rows == 0 {
                0.0
            } else {
                entry.count as f64 / report.rows as f64 * 100.0
            };
            table.add_row(vec![
                entry.sentiment.to_string(),
                entry.count.to_string(),
                format!("{:.1}%", share),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');

        let stats = &report.stats;
        out.push_str(&format!(
            "rows loaded: {}, dropped (missing values): {}, classified: {}\n",
            stats.rows_loaded, stats.rows_dropped, report.rows
        ));
        if stats.normalize_recovered + stats.score_recovered > 0 {
            out.push_str(&format!(
                "recovered rows: {} non-text, {} scorer failures\n",
                stats.normalize_recovered, stats.score_recovered
            ));
        }
    }

    out
}
