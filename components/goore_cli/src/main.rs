//! goore CLI
//!
//! Entry point for the goore front end. Parses CLI arguments and delegates
//! to the Runner.

use clap::Parser as ClapParser;
use goore_cli::{Cli, CliError, Runner};
use std::io;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

fn setup_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Only fails if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let runner = Runner::new(cli.format).with_print_tokens(cli.tokens);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match (&cli.file, &cli.eval) {
        (Some(file), _) => runner.run_file(file, &mut out),
        (None, Some(code)) => runner.run_string(code, "-e", &mut out),
        (None, None) => Err(CliError::NoInput),
    };

    match result {
        Ok(report) => {
            for error in &report.errors {
                eprintln!("{}", error);
            }
            if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("goore: {}", e);
            ExitCode::FAILURE
        }
    }
}
