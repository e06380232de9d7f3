//! End-to-end run: build the stage pipeline, execute it, write the outputs.
//!
//! Expected failures never escape as panics. They are printed through the
//! [`StatusSink`] and recorded in the returned [`RunOutcome`], whose
//! [`exit_code`](RunOutcome::exit_code) tells the kinds apart.

use super::builder::{PipelineBuilder, StageTiming};
use super::data::{
    ClassifiedReviews, CleanedReviews, NormalizedReviews, PipelineReport, RowTable,
};
use super::stage::{infallible, StageFn};
use super::stages::{
    build_report, classify_reviews, clean_table, load_table, normalize_reviews, RowStageOptions,
};
use crate::config::PipelineConfig;
use crate::errors::PipelineError;
use crate::io::status::StatusSink;
use crate::io::writers::{write_reviews, write_summary};
use crate::observability::{set_input_file, set_phase, PipelinePhase};
use crate::sentiment::scorer::catch_scorer_panic;
use crate::sentiment::{build_classifier, Classify};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;

/// Exit code for a run that wrote both files.
pub const EXIT_OK: i32 = 0;
/// Exit code for a run halted on an input or schema problem.
pub const EXIT_HALTED: i32 = 1;
/// Exit code for a run whose outputs could not all be written.
pub const EXIT_WRITE_FAILED: i32 = 2;
/// Exit code for an unexpected hard failure.
pub const EXIT_FAILED: i32 = 3;

/// The three files of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: PathBuf,
    /// Draw a progress bar on stderr during classification.
    pub show_progress: bool,
}

impl RunRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        summary: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            summary: summary.into(),
            show_progress: false,
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Present when every stage succeeded.
    pub report: Option<PipelineReport>,
    /// The error that stopped the pipeline, if any.
    pub error: Option<PipelineError>,
    /// Output files that failed to write.
    pub write_errors: Vec<PipelineError>,
    /// Output files written successfully.
    pub written: Vec<PathBuf>,
    pub timings: Vec<StageTiming>,
}

impl RunOutcome {
    fn halted(error: PipelineError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.write_errors.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        match &self.error {
            Some(e) if e.is_graceful_halt() => EXIT_HALTED,
            Some(_) => EXIT_FAILED,
            None if !self.write_errors.is_empty() => EXIT_WRITE_FAILED,
            None => EXIT_OK,
        }
    }
}

/// Run the pipeline with the classifier described by `config`.
pub fn run_with_config(
    request: &RunRequest,
    config: &PipelineConfig,
    status: &dyn StatusSink,
) -> RunOutcome {
    let classifier = build_classifier(&config.scorer);
    run(request, config, Arc::from(classifier), status)
}

/// Run the pipeline with an injected classifier.
pub fn run(
    request: &RunRequest,
    config: &PipelineConfig,
    classifier: Arc<dyn Classify>,
    status: &dyn StatusSink,
) -> RunOutcome {
    let _input = set_input_file(&request.input);

    let prepared = catch_scorer_panic(classifier.name(), || classifier.prepare());
    if let Err(e) = prepared.and_then(|ready| ready) {
        let error = PipelineError::Scorer(e);
        status.error(&error.to_string());
        return RunOutcome::halted(error);
    }

    let (report, timings) = match execute_stages(request, config, classifier) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("Run stopped in the {} category: {:?}", e.category(), e);
            status.error(&e.to_string());
            return RunOutcome::halted(e);
        }
    };

    let _phase = set_phase(PipelinePhase::Writing);
    let mut outcome = RunOutcome {
        timings,
        ..RunOutcome::default()
    };

    let writes = [
        (&request.output, write_reviews(&request.output, &report.rows)),
        (
            &request.summary,
            write_summary(&request.summary, &report.summary),
        ),
    ];
    for (path, result) in writes {
        match result {
            Ok(()) => {
                status.success(&format!("File saved successfully at {}.", path.display()));
                outcome.written.push(path.clone());
            }
            Err(e) => {
                status.error(&e.to_string());
                outcome.write_errors.push(e);
            }
        }
    }

    outcome.report = Some(report);
    outcome
}

fn execute_stages(
    request: &RunRequest,
    config: &PipelineConfig,
    classifier: Arc<dyn Classify>,
) -> Result<(PipelineReport, Vec<StageTiming>), PipelineError> {
    let input = request.input.clone();
    let loader = config.loader_options();
    let cleaner = config.clean_options();
    let normalize_options = config.normalize;
    let policy = config.row_policy;
    let normalize_parallel = config.parallel.clone();
    let classify_parallel = config.parallel.clone();
    let progress = progress_bar(request.show_progress);

    let pipeline = PipelineBuilder::new()
        .stage(StageFn::new("load", move |()| {
            let _phase = set_phase(PipelinePhase::Loading);
            load_table(&input, &loader)
        }))
        .stage(StageFn::new("clean", move |table: RowTable| {
            let _phase = set_phase(PipelinePhase::Cleaning);
            clean_table(table, &cleaner)
        }))
        .stage(StageFn::new("normalize", move |cleaned: CleanedReviews| {
            let _phase = set_phase(PipelinePhase::Normalizing);
            let stage = RowStageOptions {
                policy,
                parallel: normalize_parallel.should_parallelize(cleaned.reviews.len()),
                progress: ProgressBar::hidden(),
            };
            normalize_reviews(cleaned, &normalize_options, &stage)
        }))
        .stage(StageFn::new("classify", move |normalized: NormalizedReviews| {
            let _phase = set_phase(PipelinePhase::Classifying);
            let stage = RowStageOptions {
                policy,
                parallel: classify_parallel.should_parallelize(normalized.texts.len()),
                progress: progress.clone(),
            };
            classify_reviews(normalized, classifier.as_ref(), &stage)
        }))
        .stage(infallible("summarize", |classified: ClassifiedReviews| {
            let _phase = set_phase(PipelinePhase::Summarizing);
            build_report(classified)
        }))
        .build();

    pipeline.execute()
}

fn progress_bar(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    let template = "{spinner} classifying [{bar:40}] {pos}/{len} rows";
    if let Ok(style) = ProgressStyle::with_template(template) {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}
