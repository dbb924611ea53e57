mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{chain, completions, lists, phone, text, Context};
use crate::error::{exit_code_for, report_error};
use filterkit_config as config;

#[derive(Debug, Parser)]
#[command(name = "filterkit", version, about = "Display-formatting filters")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format a phone number for display
    Tel(phone::TelArgs),
    /// Render a ratio as a percentage
    Percentage(text::PercentageArgs),
    Truncate(text::TruncateArgs),
    /// Escape text for HTML output
    Escape(text::EscapeArgs),
    /// Convert seconds past local midnight on 1970-01-01
    Seconds(text::SecondsArgs),
    /// Keep list items containing every search term
    Multiple(lists::MultipleArgs),
    /// Keep list items whose field matches a pattern
    Regex(lists::RegexArgs),
    /// Run a value through a filter chain
    Apply(chain::ApplyArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config =
                config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let ctx = Context {
                json,
                config: &app_config,
            };

            match command {
                Command::Tel(args) => phone::tel(&ctx, args),
                Command::Percentage(args) => text::percentage(&ctx, args),
                Command::Truncate(args) => text::truncate(&ctx, args),
                Command::Escape(args) => text::escape(&ctx, args),
                Command::Seconds(args) => text::seconds(&ctx, args),
                Command::Multiple(args) => lists::multiple(&ctx, args),
                Command::Regex(args) => lists::regex(&ctx, args),
                Command::Apply(args) => chain::apply(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
