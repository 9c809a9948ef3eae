//! Command-line interface and orchestration for tabrisk
//!
//! This module implements the CLI commands and drives the other modules through an
//! evaluation: argument parsing, configuration management and the run itself.
//!
//! ## Commands
//!
//! - **evaluate**: load the datasets, run every metric plugin and write a report
//! - **plugins**: list the discovered metric plugins
//! - **init**: generate a default configuration file
//! - **validate**: check a configuration file
//!
//! ## Execution Flow
//!
//! `run` parses the arguments with clap and routes to a command handler. An evaluation
//! goes through [`run_evaluation`], which
//!
//! 1. lists and loads the CSV files of the data directory,
//! 2. discovers the plugin units into a registry,
//! 3. runs the engine over the datasets and plugin options,
//! 4. writes the HTML or JSON report.
//!
//! Configuration lives in `tabrisk.toml`: the data directory, the execution mode, and an
//! opaque `[options]` table handed to every plugin.

mod common;
mod config;
mod evaluate;
mod flow;
mod host;
mod init;
mod plugins;
mod progress_reporter;
mod run;
mod validate;

pub use common::{ColorMode, LogLevel};
pub use config::Config;
pub use evaluate::{EvaluateArgs, evaluate};
pub use flow::{EvaluationRequest, RunSummary, run_evaluation};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use plugins::list_plugins;
pub use progress_reporter::ProgressReporter;
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
