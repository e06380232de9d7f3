use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Profile;

#[derive(Parser, Debug)]
#[command(name = "review-sentiment")]
#[command(about = "Classify the sentiment of product reviews in a CSV file", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, clean, normalize and classify reviews, then write the results
    Run {
        /// Input CSV file with a review column
        #[arg(default_value = "user_review.csv")]
        input: PathBuf,

        /// Where to write the per-review labels
        #[arg(default_value = "processed_reviews.csv")]
        output: PathBuf,

        /// Where to write the label counts
        #[arg(default_value = "sentiment_summary.csv")]
        summary: PathBuf,

        /// Pipeline profile (overrides the config file)
        #[arg(short, long, value_enum)]
        profile: Option<ProfileArg>,

        /// Configuration file (skips discovery of .review-sentiment.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of worker threads (0 = use all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0", env = "REVIEW_SENTIMENT_JOBS")]
        jobs: usize,

        /// Process rows sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Format of the end-of-run report
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colors and progress bars
        #[arg(long = "plain")]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Print only the status lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    /// Polarity scorer with a sign rule
    Classic,
    /// Compound scorer with a dead zone (default)
    Robust,
}

impl From<ProfileArg> for Profile {
    fn from(p: ProfileArg) -> Self {
        match p {
            ProfileArg::Classic => Profile::Classic,
            ProfileArg::Robust => Profile::Robust,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
