//! Command-line interface: argument parsing (`args`) and runtime setup
//! (`setup`).

pub mod args;
pub mod setup;

pub use args::{parse_args, Cli, Commands, OutputFormat, ProfileArg};
pub use setup::{configure_thread_pool, init_logging, log_level, use_color};
