//! Schema command implementation.
//!
//! Prints what the host would learn from the provider: its metadata and the
//! attribute schema of every data source. With `--json-schema`, prints the
//! JSON Schema of the configuration document accepted by `read` instead.

use crate::formatters::format_output;
use anyhow::Result;
use fastlocal_core::cli::{ExitCode, OutputFormat};
use fastlocal_provider::{FastLocalProvider, FileDataSourceModel, ProviderMetadata, Schema};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Provider metadata plus every data source schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    /// Provider identity
    pub provider: ProviderMetadata,
    /// Provider-level schema
    pub provider_schema: Schema,
    /// Data source schemas keyed by full type name
    pub data_sources: BTreeMap<String, Schema>,
}

/// Builds the schema report for `provider`.
#[must_use]
pub fn schema_report(provider: &FastLocalProvider) -> SchemaReport {
    let data_sources = provider
        .data_sources()
        .iter()
        .map(|ds| (ds.type_name(FastLocalProvider::TYPE_NAME), ds.schema()))
        .collect();

    SchemaReport {
        provider: provider.metadata(),
        provider_schema: provider.schema(),
        data_sources,
    }
}

/// Returns the JSON Schema of the configuration document.
pub fn config_json_schema() -> Result<Value> {
    let schema = schemars::schema_for!(FileDataSourceModel);
    Ok(serde_json::to_value(schema)?)
}

/// Runs the schema command.
pub fn run(json_schema: bool, output_format: OutputFormat) -> Result<ExitCode> {
    let output = if json_schema {
        format_output(&config_json_schema()?, output_format)?
    } else {
        let provider = FastLocalProvider::new(env!("CARGO_PKG_VERSION"));
        format_output(&schema_report(&provider), output_format)?
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_report_lists_file_data_source() {
        let report = schema_report(&FastLocalProvider::new("test"));

        assert_eq!(report.provider.type_name, "fastlocal");
        assert_eq!(report.provider.version, "test");
        assert!(report.provider_schema.attributes.is_empty());

        let file = &report.data_sources["fastlocal_file"];
        assert_eq!(file.sensitive_paths(), ["files.file_contents"]);
    }

    #[test]
    fn test_config_json_schema_shape() {
        let schema = config_json_schema().unwrap();

        assert_eq!(schema["required"], serde_json::json!(["files"]));
        assert!(schema["properties"]["files"].is_object());
        assert!(schema["properties"]["add_newline_at_end"].is_object());
    }

    #[test]
    fn test_run_schema() {
        assert_eq!(run(false, OutputFormat::Json).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(true, OutputFormat::Text).unwrap(), ExitCode::SUCCESS);
    }
}
