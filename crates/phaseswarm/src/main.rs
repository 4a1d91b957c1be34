//! PhaseSwarm CLI - installs assistant command templates and lists tracked projects
//!
//! This is the main entry point for the PhaseSwarm command-line interface.

mod cli;
mod commands;
mod output;
mod prompt;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Parse CLI args
    let cli = Cli::parse_from(cli::normalize_command(std::env::args_os()));

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    // Run command
    let result = match cli.command.unwrap_or(Commands::Help) {
        Commands::Init(args) => commands::init::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Help => {
            commands::help::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print a failure with its remediation hint, if the cause has one
fn report_error(err: &anyhow::Error) {
    output::error(&format!("{:#}", err));

    let hint = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<phaseswarm_core::Error>())
        .and_then(phaseswarm_core::Error::hint);
    if let Some(hint) = hint {
        output::info(hint);
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
