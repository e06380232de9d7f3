//! The five review pipeline stages.
//!
//! Loading and cleaning are fallible whole-table steps. Normalization and
//! classification map over rows and apply the row error policy. Summarizing
//! is pure.

pub mod classify;
pub mod clean;
pub mod load;
pub mod normalize;
pub mod rows;
pub mod summarize;

pub use classify::classify_reviews;
pub use clean::{clean_table, CleanOptions};
pub use load::{load_table, parse_table, LoaderOptions, DEFAULT_NULL_MARKERS};
pub use normalize::{normalize_reviews, RowStageOptions};
pub use summarize::{build_report, summarize};
