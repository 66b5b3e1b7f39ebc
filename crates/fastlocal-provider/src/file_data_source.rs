//! The `fastlocal_file` data source.
//!
//! Modeled as a data source rather than a resource: it is read on every plan
//! and has no create/update/delete lifecycle. Every read writes every
//! declared file.
//!
//! The state returned to the host echoes the configuration with each
//! `file_contents` set to null, so file contents never reach persisted
//! state. The contents are still required on every read, which means there
//! is no drift detection between reads.

use crate::diagnostics::Diagnostics;
use crate::provider::{DataSource, ReadRequest, ReadResponse};
use crate::schema::{Attribute, Schema};
use fastlocal_files::{FileMaterializer, MaterializationRequest, RequestBuilder};
use schemars::JsonSchema;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

/// Summary of the diagnostic emitted for each failed write.
pub const WRITE_FAILED_SUMMARY: &str = "Failed to write file.";

/// Summary of the diagnostic emitted when the configuration cannot be decoded.
pub const INVALID_CONFIG_SUMMARY: &str = "Invalid configuration";

/// Decoded configuration of the data source.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FileDataSourceModel {
    /// Files to write, in order.
    pub files: Vec<FileModel>,

    /// Append the platform line ending to each file that does not already
    /// end with one. Absent or null means false.
    #[serde(default)]
    pub add_newline_at_end: Option<bool>,
}

/// One declared file.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FileModel {
    /// Filename to create.
    pub filename: String,

    /// Text to put in the file.
    #[serde(deserialize_with = "deserialize_secret")]
    #[schemars(with = "String")]
    pub file_contents: SecretString,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl FileDataSourceModel {
    /// Returns the state to persist: this configuration with every
    /// `file_contents` scrubbed.
    #[must_use]
    pub fn scrubbed_state(&self) -> FileDataSourceState {
        FileDataSourceState {
            files: self
                .files
                .iter()
                .map(|file| FileState::scrubbed(&file.filename))
                .collect(),
            add_newline_at_end: self.add_newline_at_end,
        }
    }

    /// Converts the configuration into a materialization request, keeping
    /// every entry in declaration order.
    #[must_use]
    pub fn into_request(self) -> MaterializationRequest {
        let append = self.add_newline_at_end.unwrap_or(false);
        self.files
            .into_iter()
            .fold(
                RequestBuilder::new().append_trailing_newline(append),
                |builder, file| builder.add_secret_file(file.filename, file.file_contents),
            )
            .build()
    }
}

/// Persisted state of the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDataSourceState {
    files: Vec<FileState>,
    add_newline_at_end: Option<bool>,
}

impl FileDataSourceState {
    /// Returns the file entries.
    #[must_use]
    pub fn files(&self) -> &[FileState] {
        &self.files
    }

    /// Returns the configured newline flag as declared.
    #[must_use]
    pub const fn add_newline_at_end(&self) -> Option<bool> {
        self.add_newline_at_end
    }
}

/// Persisted state of one file. The contents are always null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileState {
    filename: String,
    file_contents: Option<String>,
}

impl FileState {
    fn scrubbed(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            file_contents: None,
        }
    }

    /// Returns the file name.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the persisted contents, which are never set.
    #[must_use]
    pub const fn file_contents(&self) -> Option<&String> {
        self.file_contents.as_ref()
    }
}

/// Writes the declared files on every read.
#[derive(Debug, Clone, Default)]
pub struct FileDataSource {
    materializer: FileMaterializer,
}

impl FileDataSource {
    /// Creates the data source with the native line ending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            materializer: FileMaterializer::new(),
        }
    }

    /// Creates the data source around a specific materializer.
    #[must_use]
    pub const fn with_materializer(materializer: FileMaterializer) -> Self {
        Self { materializer }
    }
}

impl DataSource for FileDataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_file")
    }

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute(
                "files",
                Attribute::list_nested([
                    (
                        "filename",
                        Attribute::string()
                            .required()
                            .with_description("Filename to create."),
                    ),
                    (
                        "file_contents",
                        Attribute::string()
                            .required()
                            .sensitive()
                            .with_description("Text to put in the file"),
                    ),
                ])
                .required(),
            )
            .with_attribute("add_newline_at_end", Attribute::bool().optional())
    }

    fn read(&self, request: ReadRequest) -> ReadResponse {
        let mut diagnostics = Diagnostics::new();

        let model: FileDataSourceModel = match serde_json::from_value(request.config) {
            Ok(model) => model,
            Err(e) => {
                diagnostics.add_error(INVALID_CONFIG_SUMMARY, e.to_string());
                return ReadResponse {
                    state: None,
                    diagnostics,
                };
            }
        };

        let state = model.scrubbed_state();
        let materialization = model.into_request();

        debug!(
            files = materialization.len(),
            add_newline_at_end = materialization.append_trailing_newline(),
            "reading file data source"
        );

        for result in self.materializer.materialize(&materialization) {
            if let Some(message) = result.error_message() {
                diagnostics.add_error(WRITE_FAILED_SUMMARY, message);
            }
        }

        let state = match serde_json::to_value(&state) {
            Ok(value) => Some(value),
            Err(e) => {
                diagnostics.add_error("Failed to encode state", e.to_string());
                None
            }
        };

        info!(
            errors = diagnostics.error_count(),
            "file data source read complete"
        );

        ReadResponse { state, diagnostics }
    }
}
