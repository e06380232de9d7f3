//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline phase is running, on which input file, and which
//! row is being processed. Uses thread-local storage for per-thread context
//! (works with rayon parallel iterators) and atomic counters for global row
//! progress.
//!
//! ## Thread Safety
//!
//! - Thread-local context: Each thread has its own context (via `thread_local!`)
//! - Global progress: Atomic counters for rows processed/total
//! - Context guards use RAII for automatic cleanup on drop

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static ROWS_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static ROWS_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<RunContext> = const { RefCell::new(RunContext::new()) };
    static PANIC_CONTAINED: Cell<usize> = const { Cell::new(0) };
}

/// Snapshot of what the pipeline was doing.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub phase: Option<PipelinePhase>,
    pub input_file: Option<PathBuf>,
    pub current_row: Option<usize>,
}

impl RunContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            input_file: None,
            current_row: None,
        }
    }
}

/// Pipeline phases for context tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Loading,
    Cleaning,
    Normalizing,
    Classifying,
    Summarizing,
    Writing,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Cleaning => write!(f, "cleaning"),
            Self::Normalizing => write!(f, "normalizing"),
            Self::Classifying => write!(f, "classifying"),
            Self::Summarizing => write!(f, "summarizing"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: RunContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(f: impl FnOnce(&mut RunContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        f(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase until the guard drops.
#[must_use]
pub fn set_phase(phase: PipelinePhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

/// Set the input file until the guard drops.
#[must_use]
pub fn set_input_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.input_file = Some(path))
}

/// Set the row being processed until the guard drops.
#[must_use]
pub fn set_current_row(index: usize) -> ContextGuard {
    update(|ctx| ctx.current_row = Some(index))
}

/// RAII guard marking panics on this thread as caught by the caller.
pub struct ContainGuard(());

impl Drop for ContainGuard {
    fn drop(&mut self) {
        PANIC_CONTAINED.with(|c| c.set(c.get().saturating_sub(1)));
    }
}

/// Mark that panics on this thread are about to be caught with
/// `catch_unwind`, so the panic hook should not print a crash report.
#[must_use]
pub fn contain_panics() -> ContainGuard {
    PANIC_CONTAINED.with(|c| c.set(c.get() + 1));
    ContainGuard(())
}

#[must_use]
pub fn panics_contained() -> bool {
    PANIC_CONTAINED.with(|c| c.get() > 0)
}

pub fn set_progress(processed: usize, total: usize) {
    ROWS_PROCESSED.store(processed, Ordering::Relaxed);
    ROWS_TOTAL.store(total, Ordering::Relaxed);
}

/// Thread-safe; can be called from parallel iterators.
pub fn increment_processed() {
    ROWS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> RunContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Current progress as (processed, total) rows.
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        ROWS_PROCESSED.load(Ordering::Relaxed),
        ROWS_TOTAL.load(Ordering::Relaxed),
    )
}

pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = RunContext::new();
    });
}
