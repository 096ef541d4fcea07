//! sy-board - precompute Scotland Yard board data
//!
//! Writes the board adjacency listing plus seeker and hider distance
//! tables as XML documents for the game runtime.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use sy_board_core::error::{BoardError, ExitCode as BoardExitCode};
use sy_board_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists, so a `--format json`
            // request has to be read from argv to get a structured error.
            if argv_format_json {
                let board_error = match err.kind() {
                    // Help and version are informational, not errors - let clap print them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    // Every flag is single-valued, so a conflict is a repeated flag
                    clap::error::ErrorKind::ArgumentConflict if argv_repeats_format() => {
                        BoardError::DuplicateFormat
                    }
                    clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        BoardError::UsageError(err.to_string())
                    }
                    _ => BoardError::Other(err.to_string()),
                };

                eprintln!("{}", board_error.to_json());
                return ExitCode::from(board_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // If tracing initialization fails, fall back to stderr
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(BoardExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("error: {}", e);
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn is_format_flag(arg: &str) -> bool {
    arg == "--format" || arg.starts_with("--format=")
}

fn argv_repeats_format() -> bool {
    env::args().skip(1).filter(|arg| is_format_flag(arg)).count() > 1
}

/// Scan raw argv for `--format json` / `--format=json`.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
