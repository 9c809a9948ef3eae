//! Command dispatch logic for tabrisk

use super::{EvaluateArgs, InitArgs, ValidateArgs, evaluate, init_config, list_plugins, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "tabrisk", version, author, long_about = None)]
#[command(about = "Evaluate privacy-risk metrics over tabular datasets")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: TabriskSubcommand,
}

#[derive(Subcommand, Debug)]
enum TabriskSubcommand {
    /// Run every metric plugin over the datasets and write a report
    Evaluate(Box<EvaluateArgs>),
    /// List the discovered metric plugins
    Plugins,
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        TabriskSubcommand::Evaluate(evaluate_args) => evaluate(host, evaluate_args).await,
        TabriskSubcommand::Plugins => list_plugins(host),
        TabriskSubcommand::Init(init_args) => init_config(host, init_args),
        TabriskSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
