//! Observability infrastructure for crash reports and debugging.
//!
//! Install the panic hook at startup, then mark phases and rows as the
//! pipeline moves through them:
//!
//! ```ignore
//! use review_sentiment::observability::{set_phase, PipelinePhase};
//!
//! let _phase = set_phase(PipelinePhase::Classifying);
//! // A panic here reports the classifying phase
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    contain_panics, get_current_context, get_progress, increment_processed, panics_contained,
    reset_context, set_current_row, set_input_file, set_phase, set_progress, ContainGuard,
    ContextGuard, PipelinePhase, RunContext,
};
pub use panic_hook::install_panic_hook;
