//! fastlocal CLI.
//!
//! Stands in for the orchestration host: loads a data source configuration
//! from disk, writes the declared files, and reports diagnostics.
//!
//! # Examples
//!
//! ```bash
//! # Write every file declared in files.json
//! fastlocal read files.json
//!
//! # Same, persisting the scrubbed state
//! fastlocal read files.toml --state-out state.json
//!
//! # Show the data source schema
//! fastlocal schema
//! ```

use anyhow::Result;
use clap::Parser;
use fastlocal_cli::Cli;
use fastlocal_cli::runner::{execute_command, init_logging};
use fastlocal_core::cli::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let exit_code = execute_command(cli.command, output_format)?;

    std::process::exit(exit_code.as_i32());
}
