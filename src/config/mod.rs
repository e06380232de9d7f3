//! Configuration for pipeline runs.
//!
//! Settings come from three layers: profile defaults, the optional
//! `.review-sentiment.toml` file, and command-line flags. [`ConfigFile`] is
//! the raw file, [`PipelineConfig`] the resolved result.

mod core;
mod loader;
mod parallel;

pub use self::core::{
    ConfigFile, ErrorsSection, InputSection, NormalizeSection, PipelineConfig, Profile,
    RowErrorPolicy, ScorerKind, ScorerOptions, ScorerSection, DEFAULT_COLUMN,
};
pub use loader::{
    directory_ancestors, discover_config, discover_config_from, load_config_file, parse_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;

/// Commented template written by `init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# review-sentiment configuration

# classic: polarity scorer, sign rule, lowercase + punctuation only, abort on bad rows
# robust:  compound scorer, +/-0.05 dead zone, also strip digits and whitespace, recover bad rows
profile = "robust"

[input]
column = "review"
delimiter = ","

[normalize]
# strip_digits = true
# collapse_whitespace = true

[scorer]
# kind = "compound"            # compound | polarity
# positive_threshold = 0.05
# negative_threshold = -0.05

[errors]
# row_policy = "recover"       # recover | abort
# check_column = true

[parallel]
enabled = true
jobs = 0
min_rows = 1000
"#;
