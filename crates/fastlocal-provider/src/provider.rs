//! Provider definition and the data source seam.
//!
//! # Examples
//!
//! ```
//! use fastlocal_provider::FastLocalProvider;
//! use serde_json::json;
//!
//! let provider = FastLocalProvider::new("1.2.3");
//! let metadata = provider.metadata();
//! assert_eq!(metadata.type_name, "fastlocal");
//! assert_eq!(metadata.version, "1.2.3");
//!
//! assert!(!provider.configure(&json!({})).has_error());
//! assert_eq!(provider.data_source_type_names(), ["fastlocal_file"]);
//! ```

use crate::diagnostics::Diagnostics;
use crate::file_data_source::FileDataSource;
use crate::schema::Schema;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Request passed to [`DataSource::read`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReadRequest {
    /// Data source configuration as declared by the user
    pub config: Value,
}

impl ReadRequest {
    /// Creates a read request from a configuration value.
    #[must_use]
    pub const fn new(config: Value) -> Self {
        Self { config }
    }
}

/// Response returned by [`DataSource::read`].
///
/// `state` is what the host persists. It is `None` when the configuration
/// could not be decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReadResponse {
    /// State to persist
    pub state: Option<Value>,
    /// Diagnostics for the host to display
    pub diagnostics: Diagnostics,
}

/// A data source the host can read.
pub trait DataSource: fmt::Debug + Send + Sync {
    /// Returns the full type name, derived from the provider's type name.
    fn type_name(&self, provider_type_name: &str) -> String;

    /// Returns the attribute schema.
    fn schema(&self) -> Schema;

    /// Performs the read.
    ///
    /// Never fails as a whole: every problem is reported as a diagnostic.
    fn read(&self, request: ReadRequest) -> ReadResponse;
}

/// Provider identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    /// Prefix of every data source type name
    pub type_name: String,
    /// Provider version
    pub version: String,
}

type DataSourceFactory = fn() -> Box<dyn DataSource>;

const DATA_SOURCES: &[DataSourceFactory] = &[new_file_data_source];

fn new_file_data_source() -> Box<dyn DataSource> {
    Box::new(FileDataSource::new())
}

/// The `fastlocal` provider.
///
/// `version` is the release version, `"dev"` for local builds, or `"test"`
/// under test.
#[derive(Debug, Clone)]
pub struct FastLocalProvider {
    version: String,
}

impl FastLocalProvider {
    /// Provider type name.
    pub const TYPE_NAME: &'static str = "fastlocal";

    /// Creates the provider.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Returns the provider metadata.
    #[must_use]
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: Self::TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    /// Returns the provider-level schema, which has no attributes.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn schema(&self) -> Schema {
        Schema::new()
    }

    /// Validates the provider-level configuration.
    ///
    /// Accepts `null` or an empty object.
    #[must_use]
    pub fn configure(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        match config {
            Value::Null => {}
            Value::Object(map) => {
                for key in map.keys() {
                    diagnostics.add_error(
                        "Unsupported argument",
                        format!("An argument named \"{key}\" is not expected here."),
                    );
                }
            }
            other => diagnostics.add_error(
                "Invalid provider configuration",
                format!("expected an object, found {}", value_kind(other)),
            ),
        }
        debug!(errors = diagnostics.error_count(), "configured provider");
        diagnostics
    }

    /// Returns one instance of every data source.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        DATA_SOURCES.iter().map(|factory| factory()).collect()
    }

    /// Returns the full type names of every data source.
    #[must_use]
    pub fn data_source_type_names(&self) -> Vec<String> {
        self.data_sources()
            .iter()
            .map(|ds| ds.type_name(Self::TYPE_NAME))
            .collect()
    }

    /// Looks up a data source by its full type name, e.g. `fastlocal_file`.
    #[must_use]
    pub fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .find(|ds| ds.type_name(Self::TYPE_NAME) == type_name)
    }
}

impl Default for FastLocalProvider {
    fn default() -> Self {
        Self::new("dev")
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata() {
        let metadata = FastLocalProvider::new("test").metadata();
        assert_eq!(metadata.type_name, "fastlocal");
        assert_eq!(metadata.version, "test");
    }

    #[test]
    fn test_default_version_is_dev() {
        assert_eq!(FastLocalProvider::default().metadata().version, "dev");
    }

    #[test]
    fn test_provider_schema_is_empty() {
        assert!(FastLocalProvider::default().schema().attributes.is_empty());
    }

    #[test]
    fn test_configure_accepts_empty() {
        let provider = FastLocalProvider::default();
        assert!(provider.configure(&Value::Null).is_empty());
        assert!(provider.configure(&json!({})).is_empty());
    }

    #[test]
    fn test_configure_rejects_unknown_arguments() {
        let diagnostics = FastLocalProvider::default().configure(&json!({"a": 1, "b": 2}));
        assert_eq!(diagnostics.error_count(), 2);
        assert!(
            diagnostics
                .iter()
                .all(|d| d.summary == "Unsupported argument")
        );
    }

    #[test]
    fn test_configure_rejects_non_object() {
        let diagnostics = FastLocalProvider::default().configure(&json!([1]));
        assert!(diagnostics.has_error());
        assert!(diagnostics.iter().next().unwrap().detail.contains("an array"));
    }

    #[test]
    fn test_data_source_lookup() {
        let provider = FastLocalProvider::default();
        assert_eq!(provider.data_sources().len(), 1);
        assert!(provider.data_source("fastlocal_file").is_some());
        assert!(provider.data_source("fastlocal_dir").is_none());
        assert!(provider.data_source("file").is_none());
    }

    #[test]
    fn test_read_response_default() {
        let response = ReadResponse::default();
        assert!(response.state.is_none());
        assert!(response.diagnostics.is_empty());
    }
}
