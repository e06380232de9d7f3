//! Custom panic hook for structured crash reports.
//!
//! A panic that escapes the pipeline prints what was being processed (phase,
//! input file, row) and how far the run got. Panics raised inside a scorer
//! call are caught and turned into row errors, so they are only logged.

use super::context::{get_current_context, get_progress, panics_contained, RunContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        if panics_contained() {
            log::debug!("Contained panic: {}", extract_panic_message(info));
            return;
        }
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();

    eprintln!();
    print_header();
    print_panic_details(info);
    print_context_section(&context, processed, total);
    print_backtrace_section();
}

fn print_header() {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    eprintln!("==================== REVIEW-SENTIMENT CRASH REPORT ====================");
    eprintln!("  Version:  {}", VERSION);
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!("  Time:     {}", timestamp);
}

fn print_panic_details(info: &PanicHookInfo<'_>) {
    eprintln!("  PANIC:    {}", truncate(&extract_panic_message(info), 200));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
}

fn print_context_section(context: &RunContext, processed: usize, total: usize) {
    eprintln!("  ---------------------------------------------------------------------");
    match &context.phase {
        Some(phase) => eprintln!("  Phase:    {}", phase),
        None => eprintln!("  Phase:    (not set - crash occurred before the pipeline started)"),
    }
    if let Some(file) = &context.input_file {
        eprintln!("  Input:    {}", file.display());
    }
    if let Some(row) = context.current_row {
        eprintln!("  Row:      {}", row);
    }
    if total > 0 {
        let pct = (processed as f64 / total as f64 * 100.0) as usize;
        eprintln!("  Progress: {} / {} rows ({}%)", processed, total, pct);
    }
}

fn print_backtrace_section() {
    eprintln!("  ---------------------------------------------------------------------");
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("=======================================================================");
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
