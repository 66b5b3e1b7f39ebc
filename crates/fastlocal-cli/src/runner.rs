//! Command execution and logging initialization.

use anyhow::Result;
use fastlocal_core::cli::{ExitCode, OutputFormat};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;

/// Initializes logging.
///
/// Logs go to stderr so stdout carries only command output. `--verbose`
/// forces the debug level; otherwise `RUST_LOG` applies, defaulting to
/// `info`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the specified CLI command and returns its exit code.
pub fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    debug!(format = %output_format, ?command, "executing command");
    match command {
        Commands::Read { config, state_out } => {
            commands::read::run(&config, state_out.as_deref(), output_format)
        }
        Commands::Schema { json_schema } => commands::schema::run(json_schema, output_format),
        Commands::Completions { shell } => {
            use crate::cli::Cli;
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            Ok(commands::completions::run(shell, &mut cmd))
        }
    }
}
