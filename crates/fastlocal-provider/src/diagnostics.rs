//! Diagnostics returned to the host.
//!
//! A diagnostic never aborts a request. Data sources append as many as they
//! find and the host shows all of them together.
//!
//! # Examples
//!
//! ```
//! use fastlocal_provider::Diagnostics;
//!
//! let mut diagnostics = Diagnostics::new();
//! diagnostics.add_warning("Slow disk", "write took 3s");
//! assert!(!diagnostics.has_error());
//!
//! diagnostics.add_error("Failed to write file.", "permission denied");
//! assert!(diagnostics.has_error());
//! assert_eq!(diagnostics.error_count(), 1);
//! assert_eq!(diagnostics.len(), 2);
//! ```

use serde::Serialize;
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The operation did not fully succeed.
    Error,
    /// Informational; the operation succeeded.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// A single diagnostic: a short summary and a detail message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity
    pub severity: Severity,
    /// Short, fixed description of what went wrong
    pub summary: String,
    /// Specifics, usually the underlying error message
    pub detail: String,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Returns `true` if this is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.summary, self.detail)
    }
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Appends an error diagnostic.
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail));
    }

    /// Appends a warning diagnostic.
    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::warning(summary, detail));
    }

    /// Moves every diagnostic of `other` onto the end of this collection.
    pub fn append(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    /// Returns the number of error diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no diagnostics.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the diagnostics in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert!(!diagnostics.has_error());
        assert_eq!(diagnostics.error_count(), 0);
    }

    #[test]
    fn test_warnings_are_not_errors() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_warning("summary", "detail");
        assert!(!diagnostics.has_error());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut first = Diagnostics::new();
        first.add_error("a", "1");
        let mut second = Diagnostics::new();
        second.add_error("b", "2");
        second.add_warning("c", "3");

        first.append(second);

        let summaries: Vec<_> = first.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, ["a", "b", "c"]);
        assert_eq!(first.error_count(), 2);
    }

    #[test]
    fn test_extend() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.extend([Diagnostic::error("x", "y"), Diagnostic::warning("z", "w")]);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.into_iter().count(), 2);
    }

    #[test]
    fn test_diagnostic_display() {
        let d = Diagnostic::error("Failed to write file.", "permission denied");
        assert_eq!(d.to_string(), "error: Failed to write file.: permission denied");
    }

    #[test]
    fn test_serialization() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_error("Failed to write file.", "denied");

        let json = serde_json::to_value(&diagnostics).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "severity": "error",
                "summary": "Failed to write file.",
                "detail": "denied"
            }])
        );
    }
}
