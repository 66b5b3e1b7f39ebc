//! Output formatters for CLI commands.
//!
//! Every command report is `Serialize`. JSON and text modes print it as
//! JSON; pretty mode renders an indented, colorized outline for terminals.

use anyhow::Result;
use colored::Colorize;
use fastlocal_core::cli::OutputFormat;
use serde::Serialize;

/// Formats data according to the specified output format.
///
/// # Examples
///
/// ```
/// use fastlocal_cli::formatters::format_output;
/// use fastlocal_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     written: usize,
/// }
///
/// let output = format_output(&Summary { written: 2 }, OutputFormat::Json)?;
/// assert!(output.contains("\"written\": 2"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => json::format_compact(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as indented JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Formats data as single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Formats data as a colorized outline.
    ///
    /// Objects become `key: value` lines, arrays become `-` items, nested
    /// values are indented by two spaces per level.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        render(&value, 0, &mut out);
        Ok(out.trim_end().to_string())
    }

    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::Null => Some("null".dimmed().to_string()),
            Value::Bool(b) => Some(b.to_string().yellow().to_string()),
            Value::Number(n) => Some(n.to_string().cyan().to_string()),
            Value::String(s) => Some(s.green().to_string()),
            Value::Array(a) if a.is_empty() => Some("[]".dimmed().to_string()),
            Value::Object(o) if o.is_empty() => Some("{}".dimmed().to_string()),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn render(value: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, val) in map {
                    let key = key.blue().bold();
                    if let Some(s) = scalar(val) {
                        out.push_str(&format!("{pad}{key}: {s}\n"));
                    } else {
                        out.push_str(&format!("{pad}{key}:\n"));
                        render(val, indent + 1, out);
                    }
                }
            }
            Value::Array(items) if !items.is_empty() => {
                for item in items {
                    if let Some(s) = scalar(item) {
                        out.push_str(&format!("{pad}- {s}\n"));
                    } else {
                        out.push_str(&format!("{pad}-\n"));
                        render(item, indent + 1, out);
                    }
                }
            }
            other => {
                if let Some(s) = scalar(other) {
                    out.push_str(&format!("{pad}{s}\n"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_format() {
        let output = format_output(&json!({"a": 1}), OutputFormat::Json).unwrap();
        assert_eq!(output, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = format_output(&json!({"a": [1, 2]}), OutputFormat::Text).unwrap();
        assert_eq!(output, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_pretty_format_outline() {
        colored::control::set_override(false);

        let data = json!({
            "state": {"files": [{"filename": "/a", "file_contents": null}]},
            "diagnostics": []
        });
        let output = format_output(&data, OutputFormat::Pretty).unwrap();

        assert!(output.contains("diagnostics: []"));
        assert!(output.contains("state:\n  files:\n    -\n"));
        assert!(output.contains("\n      filename: /a"));
        assert!(output.contains("\n      file_contents: null"));
    }

    #[test]
    fn test_pretty_format_scalar() {
        colored::control::set_override(false);
        assert_eq!(format_output(&42, OutputFormat::Pretty).unwrap(), "42");
    }
}
