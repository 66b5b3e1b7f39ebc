//! Core types for file materialization.
//!
//! # Examples
//!
//! ```
//! use fastlocal_files::{FileName, FileSpec, MaterializationRequest};
//!
//! let spec = FileSpec::new(FileName::new("/tmp/a.txt"), "hello");
//! let request = MaterializationRequest::new(vec![spec], true);
//!
//! assert_eq!(request.len(), 1);
//! assert!(request.append_trailing_newline());
//! ```

use secrecy::SecretString;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while materializing files.
///
/// There is a single kind: the write failed. Names the operating system
/// cannot open (empty, containing NUL) fail the same way as any other path.
#[derive(Error, Debug)]
pub enum FilesError {
    /// The operating system rejected the write.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        /// Target path of the write
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl FilesError {
    /// Returns `true` if this is a write failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastlocal_files::FilesError;
    /// use std::io;
    ///
    /// let error = FilesError::WriteFailed {
    ///     path: "/readonly/a.txt".to_string(),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    ///
    /// assert!(error.is_write_failed());
    /// ```
    #[must_use]
    pub const fn is_write_failed(&self) -> bool {
        matches!(self, Self::WriteFailed { .. })
    }
}

/// Result type for file materialization operations.
pub type Result<T> = std::result::Result<T, FilesError>;

/// A target file name.
///
/// Relative names resolve against the process working directory. The name
/// is kept exactly as supplied; no normalization is applied.
///
/// # Examples
///
/// ```
/// use fastlocal_files::FileName;
///
/// let name = FileName::new("out/config.yaml");
/// assert_eq!(name.as_str(), "out/config.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Creates a new `FileName`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name as a `Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for FileName {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// A file to write: a target name and its content.
///
/// The content is sensitive. `Debug` redacts it and the type does not
/// implement `Serialize`.
///
/// # Examples
///
/// ```
/// use fastlocal_files::{FileName, FileSpec};
///
/// let spec = FileSpec::new(FileName::new("/tmp/token"), "s3cr3t");
/// let debug = format!("{spec:?}");
///
/// assert!(debug.contains("/tmp/token"));
/// assert!(!debug.contains("s3cr3t"));
/// ```
#[derive(Debug)]
pub struct FileSpec {
    filename: FileName,
    content: SecretString,
}

impl FileSpec {
    /// Creates a file spec from a name and its content.
    #[must_use]
    pub fn new(filename: FileName, content: impl Into<String>) -> Self {
        Self {
            filename,
            content: SecretString::from(content.into()),
        }
    }

    /// Creates a file spec from content already held as a secret.
    #[must_use]
    pub const fn from_secret(filename: FileName, content: SecretString) -> Self {
        Self { filename, content }
    }

    /// Returns the target file name.
    #[must_use]
    pub const fn filename(&self) -> &FileName {
        &self.filename
    }

    /// Returns the content.
    ///
    /// Use [`secrecy::ExposeSecret`] to read it.
    #[must_use]
    pub const fn content(&self) -> &SecretString {
        &self.content
    }
}

/// A single materialization call: the files to write, in order, and whether
/// to terminate each one with the platform line ending.
#[derive(Debug, Default)]
pub struct MaterializationRequest {
    files: Vec<FileSpec>,
    append_trailing_newline: bool,
}

impl MaterializationRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(files: Vec<FileSpec>, append_trailing_newline: bool) -> Self {
        Self {
            files,
            append_trailing_newline,
        }
    }

    /// Returns the files in input order.
    #[must_use]
    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    /// Returns whether a trailing line ending is appended when missing.
    #[must_use]
    pub const fn append_trailing_newline(&self) -> bool {
        self.append_trailing_newline
    }

    /// Returns the number of files in the request.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if the request contains no files.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Outcome of writing one file.
///
/// Carries the file name and, on failure, the error message. The content is
/// never echoed back.
///
/// # Examples
///
/// ```
/// use fastlocal_files::MaterializationResult;
///
/// let result = MaterializationResult::Failed {
///     filename: "/missing/dir/a.txt".to_string(),
///     message: "No such file or directory".to_string(),
/// };
///
/// assert!(result.is_failed());
/// assert_eq!(result.error_message(), Some("No such file or directory"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MaterializationResult {
    /// The file was written in full.
    Written {
        /// Target file name
        filename: String,
    },
    /// The write failed.
    Failed {
        /// Target file name
        filename: String,
        /// Error message from the operating system
        message: String,
    },
}

impl MaterializationResult {
    /// Returns the target file name.
    #[must_use]
    pub fn filename(&self) -> &str {
        match self {
            Self::Written { filename } | Self::Failed { filename, .. } => filename,
        }
    }

    /// Returns `true` if the file was written.
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    /// Returns `true` if the write failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the error message of a failed write.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Written { .. } => None,
            Self::Failed { message, .. } => Some(message),
        }
    }
}
