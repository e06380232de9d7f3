//! End-to-end runs through the library API with the real scorers.

mod common;

use common::{generated_reviews, Workspace};
use indoc::indoc;
use pretty_assertions::assert_eq;
use review_sentiment::config::{ParallelConfig, RowErrorPolicy};
use review_sentiment::errors::{RowError, ScoreError};
use review_sentiment::io::MemoryStatus;
use review_sentiment::pipeline::{run, EXIT_FAILED, EXIT_HALTED, EXIT_OK};
use review_sentiment::sentiment::{LabelRule, SentimentScorer, ThresholdClassifier};
use review_sentiment::{run_with_config, PipelineConfig, PipelineError, Profile};
use std::sync::Arc;

const LABELS: [&str; 3] = ["positive", "negative", "neutral"];

/// Scores everything mildly positive, but panics on the word "boom".
struct Explosive;

impl SentimentScorer for Explosive {
    fn name(&self) -> &str {
        "explosive"
    }

    fn score(&self, text: &str) -> Result<f64, ScoreError> {
        if text.contains("boom") {
            panic!("scorer crashed on {:?}", text);
        }
        Ok(0.5)
    }
}

fn run_explosive(ws: &Workspace, policy: RowErrorPolicy) -> review_sentiment::RunOutcome {
    let mut config = PipelineConfig::default();
    config.row_policy = policy;
    config.parallel = ParallelConfig::sequential();
    let classifier = ThresholdClassifier::new(Explosive, LabelRule::compound_default());
    run(&ws.request(), &config, Arc::new(classifier), &MemoryStatus::new())
}

fn run_profile(ws: &Workspace, profile: Profile) -> (review_sentiment::RunOutcome, MemoryStatus) {
    let status = MemoryStatus::new();
    let config = PipelineConfig::for_profile(profile);
    let outcome = run_with_config(&ws.request(), &config, &status);
    (outcome, status)
}

#[test]
fn test_robust_run_labels_every_complete_row() {
    let ws = Workspace::with_input(indoc! {r#"
        id,review,stars
        1,"This product is amazing and I love it!",5
        2,"Terrible quality, I hate it.",1
        3,,4
        4,"The box arrived on Tuesday.",
        5,"The box arrived on Tuesday.",3
    "#});

    let (outcome, status) = run_profile(&ws, Profile::Robust);

    assert_eq!(outcome.exit_code(), EXIT_OK);
    let rows = ws.output_rows();
    assert_eq!(
        rows,
        vec![
            (
                "this product is amazing and i love it".to_string(),
                "positive".to_string()
            ),
            ("terrible quality i hate it".to_string(), "negative".to_string()),
            ("the box arrived on tuesday".to_string(), "neutral".to_string()),
        ]
    );

    let summary = ws.summary_rows();
    let total: usize = summary.iter().map(|(_, c)| c).sum();
    assert_eq!(total, rows.len());
    assert_eq!(summary.len(), 3);

    let stats = outcome.report.unwrap().stats;
    assert_eq!(stats.rows_loaded, 5);
    assert_eq!(stats.rows_dropped, 2);

    assert_eq!(
        status.lines(),
        vec![
            format!("File saved successfully at {}.", ws.output.display()),
            format!("File saved successfully at {}.", ws.summary.display()),
        ]
    );
}

#[test]
fn test_normalized_text_differs_by_profile() {
    let input = "review\n\"Great value, works perfectly   10/10\"\n";

    let robust = Workspace::with_input(input);
    run_profile(&robust, Profile::Robust);
    assert_eq!(robust.output_rows()[0].0, "great value works perfectly");

    let classic = Workspace::with_input(input);
    run_profile(&classic, Profile::Classic);
    assert_eq!(classic.output_rows()[0].0, "great value works perfectly   1010");
    assert_eq!(classic.output_rows()[0].1, "positive");
}

#[test]
fn test_labels_come_from_the_fixed_set() {
    let ws = Workspace::with_input(&generated_reviews(25));
    for profile in [Profile::Classic, Profile::Robust] {
        let (outcome, _) = run_profile(&ws, profile);
        assert_eq!(outcome.exit_code(), EXIT_OK);
        let rows = ws.output_rows();
        assert_eq!(rows.len(), 25);
        assert!(rows.iter().all(|(_, label)| LABELS.contains(&label.as_str())));
    }
}

#[test]
fn test_missing_column_is_graceful_in_robust_profile() {
    let ws = Workspace::with_input("id,text\n1,great\n");

    let (outcome, status) = run_profile(&ws, Profile::Robust);

    assert_eq!(outcome.exit_code(), EXIT_HALTED);
    assert!(matches!(
        outcome.error,
        Some(PipelineError::MissingColumn { .. })
    ));
    assert_eq!(
        status.lines(),
        vec!["Error: Required column 'review' not found in the data."]
    );
    assert!(!ws.output.exists());
    assert!(!ws.summary.exists());
}

#[test]
fn test_missing_column_is_hard_failure_in_classic_profile() {
    let ws = Workspace::with_input("id,text\n1,great\n");

    let (outcome, _) = run_profile(&ws, Profile::Classic);

    assert_eq!(outcome.exit_code(), EXIT_FAILED);
    assert!(matches!(
        outcome.error,
        Some(PipelineError::ProjectionFailed { .. })
    ));
    assert!(!ws.output.exists());
    assert!(!ws.summary.exists());
}

#[test]
fn test_missing_and_empty_inputs_halt() {
    let ws = Workspace::new();
    let (outcome, status) = run_profile(&ws, Profile::Robust);
    assert_eq!(outcome.exit_code(), EXIT_HALTED);
    assert_eq!(
        status.lines(),
        vec![format!("Error: The file at {} was not found.", ws.input.display())]
    );

    let ws = Workspace::with_input("");
    let (outcome, status) = run_profile(&ws, Profile::Robust);
    assert_eq!(outcome.exit_code(), EXIT_HALTED);
    assert_eq!(status.lines(), vec!["Error: The file is empty."]);
    assert!(!ws.output.exists());
}

#[test]
fn test_all_rows_dropped_still_writes_headers() {
    let ws = Workspace::with_input("id,review\n1,\n,fine\n");

    let (outcome, _) = run_profile(&ws, Profile::Robust);

    assert_eq!(outcome.exit_code(), EXIT_OK);
    assert_eq!(ws.read_output(), "review,sentiment\n");
    assert_eq!(ws.read_summary(), "sentiment,count\n");
}

#[test]
fn test_non_text_cell_recovered_in_robust_profile() {
    let ws = Workspace::with_input_bytes(b"review\ngood stuff\n\xff\xfe\n");

    let (outcome, _) = run_profile(&ws, Profile::Robust);

    assert_eq!(outcome.exit_code(), EXIT_OK);
    let rows = ws.output_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], (String::new(), "neutral".to_string()));
    assert_eq!(outcome.report.unwrap().stats.normalize_recovered, 1);
}

#[test]
fn test_non_text_cell_aborts_in_classic_profile() {
    let ws = Workspace::with_input_bytes(b"review\ngood stuff\n\xff\xfe\n");

    let (outcome, _) = run_profile(&ws, Profile::Classic);

    assert_eq!(outcome.exit_code(), EXIT_FAILED);
    assert!(matches!(
        outcome.error,
        Some(PipelineError::Row { index: 1, .. })
    ));
    assert!(!ws.output.exists());
}

#[test]
fn test_parallel_matches_sequential() {
    let input = generated_reviews(300);

    let sequential = Workspace::with_input(&input);
    let mut config = PipelineConfig::default();
    config.parallel = ParallelConfig::sequential();
    run_with_config(&sequential.request(), &config, &MemoryStatus::new());

    let parallel = Workspace::with_input(&input);
    config.parallel = ParallelConfig {
        enabled: true,
        jobs: 0,
        min_rows: 0,
    };
    run_with_config(&parallel.request(), &config, &MemoryStatus::new());

    assert_eq!(sequential.read_output(), parallel.read_output());
    assert_eq!(sequential.read_summary(), parallel.read_summary());
}

#[test]
fn test_custom_column_and_delimiter() {
    let ws = Workspace::with_input("id;comment\n1;I love it\n");
    let mut config = PipelineConfig::default();
    config.column = "comment".to_string();
    config.delimiter = b';';
    config.row_policy = RowErrorPolicy::Abort;

    let outcome = run_with_config(&ws.request(), &config, &MemoryStatus::new());

    assert_eq!(outcome.exit_code(), EXIT_OK);
    assert_eq!(
        ws.output_rows(),
        vec![("i love it".to_string(), "positive".to_string())]
    );
}

#[test]
fn test_scorer_panic_recovers_to_neutral() {
    let ws = Workspace::with_input("review\ngood\nboom\n");

    let outcome = run_explosive(&ws, RowErrorPolicy::Recover);

    assert_eq!(outcome.exit_code(), EXIT_OK);
    assert_eq!(
        ws.output_rows(),
        vec![
            ("good".to_string(), "positive".to_string()),
            ("boom".to_string(), "neutral".to_string()),
        ]
    );
    assert_eq!(outcome.report.unwrap().stats.score_recovered, 1);
}

#[test]
fn test_scorer_panic_aborts_under_abort_policy() {
    let ws = Workspace::with_input("review\ngood\nboom\n");

    let outcome = run_explosive(&ws, RowErrorPolicy::Abort);

    assert_eq!(outcome.exit_code(), EXIT_FAILED);
    assert!(matches!(
        outcome.error,
        Some(PipelineError::Row {
            index: 1,
            source: RowError::Score(ScoreError::Panicked { .. })
        })
    ));
    assert!(!ws.output.exists());
    assert!(!ws.summary.exists());
}
