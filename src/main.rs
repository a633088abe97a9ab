//! Railgraph - route query CLI for small rail networks
//!
//! Loads a route list once, then answers fixed-path distance, route
//! enumeration, and shortest-route queries against it.

mod cli;
mod commands;
mod config;

use std::env;
use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands, OutputFormat};
use config::RailConfig;
use railgraph_core::error::{ExitCode as RailExitCode, RailError, Result};
use railgraph_core::logging;

fn main() -> ExitCode {
    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we
            // can inspect `Cli.format`. If the user requested JSON output, emit
            // a structured error envelope.
            if argv_format_json {
                let rail_error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        RailError::UsageError(err.to_string())
                    }
                    _ => RailError::Other(err.to_string()),
                };

                eprintln!("{}", rail_error.to_json());
                return ExitCode::from(rail_error.exit_code() as u8);
            }
            err.exit()
        }
    };

    if let Err(err) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("error: failed to initialize logging: {err}");
        return ExitCode::from(RailExitCode::Failure as u8);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(cli.format, Some(OutputFormat::Json)) {
                eprintln!("{}", err.to_json());
            } else {
                eprintln!("error: {err}");
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = RailConfig::load()?;
    let format = cli.format.or(config.format).unwrap_or_default();
    let index = commands::load_index(cli, &config)?;

    match &cli.command {
        Commands::Distance { towns } => commands::distance::execute(cli, format, &index, towns),
        Commands::Routes {
            start,
            end,
            max_stops,
            exact_stops,
            max_distance,
        } => commands::routes::execute(
            cli,
            format,
            &index,
            start,
            end,
            *max_stops,
            *exact_stops,
            *max_distance,
        ),
        Commands::Shortest { start, end } => {
            commands::shortest::execute(cli, format, &index, start, end)
        }
        Commands::Towns => commands::towns::execute(cli, format, &index),
    }
}

/// Best-effort scan for `--format json` before clap has parsed anything.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().as_deref() == Some("json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
