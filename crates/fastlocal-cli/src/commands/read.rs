//! Read command implementation.
//!
//! Loads a configuration document, reads the `fastlocal_file` data source
//! with it, and prints the resulting state and diagnostics.

use crate::formatters::format_output;
use anyhow::{Context, Result};
use fastlocal_core::cli::{ExitCode, OutputFormat};
use fastlocal_provider::{Diagnostics, FastLocalProvider, ReadRequest, load_config};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Full type name of the data source this command reads.
pub const FILE_DATA_SOURCE: &str = "fastlocal_file";

/// Outcome of a read, as printed to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadReport {
    /// Data source type name
    pub data_source: String,
    /// Provider version
    pub provider_version: String,
    /// Scrubbed state, absent if the configuration could not be decoded
    pub state: Option<Value>,
    /// Provider and data source diagnostics
    pub diagnostics: Diagnostics,
}

impl ReadReport {
    /// Returns the exit code for this report.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.diagnostics.has_error() {
            ExitCode::ERROR
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Loads the configuration at `config_path` and reads the data source.
///
/// Write failures do not make this fail; they are reported in the
/// returned diagnostics.
pub fn read_config(config_path: &Path) -> Result<ReadReport> {
    let provider = FastLocalProvider::new(env!("CARGO_PKG_VERSION"));
    let mut diagnostics = provider.configure(&Value::Null);

    let data_source = provider
        .data_source(FILE_DATA_SOURCE)
        .with_context(|| format!("provider has no data source named {FILE_DATA_SOURCE}"))?;

    let config = load_config(config_path).with_context(|| {
        format!(
            "failed to load configuration from {}",
            config_path.display()
        )
    })?;

    let response = data_source.read(ReadRequest::new(config));
    diagnostics.append(response.diagnostics);

    Ok(ReadReport {
        data_source: FILE_DATA_SOURCE.to_string(),
        provider_version: provider.metadata().version,
        state: response.state,
        diagnostics,
    })
}

/// Writes the state as indented JSON to `path`.
pub fn write_state(path: &Path, state: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write state to {}", path.display()))?;
    Ok(())
}

/// Runs the read command.
///
/// Returns `ExitCode::ERROR` when any diagnostic is an error.
pub fn run(
    config: &Path,
    state_out: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!(config = %config.display(), "reading {FILE_DATA_SOURCE}");

    let report = read_config(config)?;

    if let Some(path) = state_out {
        if let Some(state) = &report.state {
            write_state(path, state)?;
            info!(path = %path.display(), "wrote state");
        } else {
            warn!(path = %path.display(), "no state to write");
        }
    }

    println!("{}", format_output(&report, output_format)?);

    Ok(report.exit_code())
}
