//! Command implementations behind the CLI.
//!
//! - **run**: execute the sentiment pipeline and report the outcome
//! - **init**: write a commented configuration file

pub mod init;
pub mod run;

pub use init::init_config;
pub use run::{handle_run, RunCommand};
