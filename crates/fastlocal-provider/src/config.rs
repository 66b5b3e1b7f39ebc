//! Loading data source configuration documents.
//!
//! The host normally hands the provider an already-decoded configuration.
//! When driven from the command line, the configuration comes from a JSON or
//! TOML document on disk instead.
//!
//! # Examples
//!
//! ```
//! use fastlocal_provider::{ConfigFormat, parse_config};
//!
//! let toml = r#"
//! add_newline_at_end = true
//!
//! [[files]]
//! filename = "/tmp/a.txt"
//! file_contents = "hello"
//! "#;
//!
//! let value = parse_config(toml, ConfigFormat::Toml).unwrap();
//! assert_eq!(value["files"][0]["filename"], "/tmp/a.txt");
//! assert_eq!(value["add_newline_at_end"], true);
//! ```

use fastlocal_core::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigFormat {
    /// JSON document
    #[default]
    Json,
    /// TOML document
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension: `.toml` is TOML, anything
    /// else is JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastlocal_provider::ConfigFormat;
    ///
    /// assert_eq!(ConfigFormat::from_path("files.toml"), ConfigFormat::Toml);
    /// assert_eq!(ConfigFormat::from_path("files.json"), ConfigFormat::Json);
    /// assert_eq!(ConfigFormat::from_path("files"), ConfigFormat::Json);
    /// ```
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parses a configuration document into a JSON value.
///
/// # Errors
///
/// Returns `Error::SerializationError` for malformed JSON and
/// `Error::ConfigError` for malformed TOML.
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<Value> {
    match format {
        ConfigFormat::Json => Ok(serde_json::from_str(text)?),
        ConfigFormat::Toml => toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("invalid TOML: {e}"),
        }),
    }
}

/// Reads and parses a configuration document, choosing the format from the
/// file extension.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, or a parse error as
/// described in [`parse_config`].
pub fn load_config(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading configuration");

    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&text, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path_case_insensitive() {
        assert_eq!(ConfigFormat::from_path("A.TOML"), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("dir.toml/a.json"), ConfigFormat::Json);
    }

    #[test]
    fn test_parse_json() {
        let value = parse_config(r#"{"files": []}"#, ConfigFormat::Json).unwrap();
        assert_eq!(value, json!({"files": []}));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_config("{", ConfigFormat::Json).unwrap_err();
        assert!(err.is_serialization_error());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("files = [", ConfigFormat::Toml).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_config_json_and_toml() {
        let temp = TempDir::new().unwrap();

        let json_path = temp.path().join("c.json");
        fs::write(&json_path, r#"{"files": [], "add_newline_at_end": false}"#).unwrap();
        let toml_path = temp.path().join("c.toml");
        fs::write(&toml_path, "files = []\nadd_newline_at_end = false\n").unwrap();

        assert_eq!(load_config(&json_path).unwrap(), load_config(&toml_path).unwrap());
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path().join("absent.json")).unwrap_err();
        assert!(err.is_io_error());
    }
}
