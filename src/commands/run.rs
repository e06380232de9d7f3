use crate::cli::{configure_thread_pool, OutputFormat};
use crate::config::{discover_config, load_config_file, ConfigFile, PipelineConfig, Profile};
use crate::errors::PipelineError;
use crate::io::{render_json, render_terminal, ConsoleStatus, RunReport, StatusSink};
use crate::pipeline::{run_with_config, RunOutcome, RunRequest, EXIT_FAILED};
use anyhow::Result;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Settings for one `run` invocation, gathered from the command line.
#[derive(Debug, Clone)]
pub struct RunCommand {
    pub input: PathBuf,
    pub output: PathBuf,
    pub summary: PathBuf,
    pub profile: Option<Profile>,
    pub config: Option<PathBuf>,
    pub jobs: usize,
    pub no_parallel: bool,
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

/// Resolve configuration: an explicit file, else discovery from the working
/// directory, then the profile override and parallelism flags on top.
pub fn resolve_config(command: &RunCommand) -> Result<PipelineConfig, PipelineError> {
    let file = match &command.config {
        Some(path) => load_config_file(path)?,
        None => discover_config(),
    };
    apply_overrides(&file, command)
}

fn apply_overrides(
    file: &ConfigFile,
    command: &RunCommand,
) -> Result<PipelineConfig, PipelineError> {
    let mut config = file.resolve(command.profile)?;
    if command.no_parallel {
        config.parallel.enabled = false;
    }
    if command.jobs > 0 {
        config.parallel.jobs = command.jobs;
    }
    Ok(config)
}

/// Execute `run` and return the process exit code.
pub fn handle_run(command: RunCommand) -> Result<i32> {
    let status = match command.format {
        OutputFormat::Json => ConsoleStatus::stderr(command.color),
        OutputFormat::Terminal => ConsoleStatus::new(command.color),
    };

    let config = match resolve_config(&command) {
        Ok(config) => config,
        Err(e) => {
            status.error(&e.to_string());
            return Ok(EXIT_FAILED);
        }
    };
    log::info!(
        "Running with the {:?} profile ({:?} scorer)",
        config.profile,
        config.scorer.kind
    );

    if config.parallel.enabled {
        let jobs = config.parallel.effective_jobs();
        log::debug!("Using {} worker threads", jobs);
        configure_thread_pool(jobs);
    }

    let mut request = RunRequest::new(&command.input, &command.output, &command.summary);
    request.show_progress = command.color
        && !command.quiet
        && command.format == OutputFormat::Terminal
        && std::io::stderr().is_terminal();

    let outcome = run_with_config(&request, &config, &status);
    print_report(&command, &request, &outcome)?;

    Ok(outcome.exit_code())
}

fn print_report(command: &RunCommand, request: &RunRequest, outcome: &RunOutcome) -> Result<()> {
    if command.quiet {
        return Ok(());
    }
    let report = RunReport::new(request, outcome);
    match command.format {
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Terminal => {
            for timing in &outcome.timings {
                log::debug!("{}", timing.format());
            }
            print!("{}", render_terminal(&report, command.color));
        }
    }
    Ok(())
}
