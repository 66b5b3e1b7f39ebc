//! Builder for materialization requests.
//!
//! # Examples
//!
//! ```
//! use fastlocal_files::RequestBuilder;
//!
//! let request = RequestBuilder::new()
//!     .add_file("/tmp/a.txt", "a")
//!     .add_file("/tmp/b.txt", "b")
//!     .append_trailing_newline(true)
//!     .build();
//!
//! assert_eq!(request.len(), 2);
//! ```

use crate::types::{FileName, FileSpec, MaterializationRequest};
use secrecy::SecretString;

/// Builder for [`MaterializationRequest`].
///
/// Names are taken as given. A name the operating system cannot open is
/// reported as a failed write for that entry when the request is
/// materialized, in its input position.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    files: Vec<FileSpec>,
    append_trailing_newline: bool,
}

impl RequestBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file.
    #[must_use]
    pub fn add_file(mut self, filename: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push(FileSpec::new(FileName::new(filename), content));
        self
    }

    /// Adds a file whose content is already held as a secret.
    #[must_use]
    pub fn add_secret_file(mut self, filename: impl Into<String>, content: SecretString) -> Self {
        self.files.push(FileSpec::from_secret(FileName::new(filename), content));
        self
    }

    /// Adds multiple files.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastlocal_files::RequestBuilder;
    ///
    /// let request = RequestBuilder::new()
    ///     .add_files([("/tmp/1", "one"), ("/tmp/2", "two")])
    ///     .build();
    ///
    /// assert_eq!(request.len(), 2);
    /// ```
    #[must_use]
    pub fn add_files<N, C>(self, files: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        files
            .into_iter()
            .fold(self, |builder, (name, content)| builder.add_file(name, content))
    }

    /// Sets whether a missing trailing line ending is appended.
    #[must_use]
    pub const fn append_trailing_newline(mut self, append: bool) -> Self {
        self.append_trailing_newline = append;
        self
    }

    /// Returns the number of files added so far.
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Consumes the builder and returns the request.
    #[must_use]
    pub fn build(self) -> MaterializationRequest {
        MaterializationRequest::new(self.files, self.append_trailing_newline)
    }
}
