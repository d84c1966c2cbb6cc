//! The `gridsketch` binary.
//!
//! Diagnostics go to standard error whatever the log level. The exit status
//! is 0 on success, 2 when the scene or settings file is rejected and 1 for
//! any other failure.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error};

use gridsketch::GridsketchError;
use gridsketch_cli::{Args, ErrorAdapter, exit_status};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match gridsketch_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("gridsketch: unknown log level `{level}`, logging warnings only");
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .format_timestamp(None)
        .init();
}

/// Prints the diagnostic for `err` to standard error
fn report(err: &GridsketchError) {
    error!(error:% = err; "Command failed");

    let mut rendered = String::new();
    let handler = miette::GraphicalReportHandler::new();
    if handler
        .render_report(&mut rendered, &ErrorAdapter(err))
        .is_err()
    {
        rendered = format!("gridsketch: {err}\n");
    }
    eprint!("{rendered}");
}
