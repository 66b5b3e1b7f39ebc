//! Writes declared files to the local filesystem.
//!
//! Files are written sequentially in input order. Each write opens the
//! target with create and truncate, then writes the whole buffer. There is
//! no existence check and no content comparison beforehand.
//!
//! # Examples
//!
//! ```
//! use fastlocal_files::{FileMaterializer, RequestBuilder};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let good = temp.path().join("good.txt");
//! let bad = temp.path().join("missing/dir/bad.txt");
//!
//! let request = RequestBuilder::new()
//!     .add_file(bad.to_string_lossy(), "never written")
//!     .add_file(good.to_string_lossy(), "written")
//!     .build();
//!
//! let results = FileMaterializer::new().materialize(&request);
//!
//! assert!(results[0].is_failed());
//! assert!(results[1].is_written());
//! assert_eq!(std::fs::read_to_string(&good).unwrap(), "written");
//! ```

use crate::line_ending::LineEnding;
use crate::types::{FileSpec, FilesError, MaterializationRequest, MaterializationResult, Result};
use secrecy::ExposeSecret;
use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Permission bits for newly created files (`rw-r--r--`).
///
/// Applied on Unix when the file is created, subject to the process umask.
/// Existing files keep their permissions.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Writes the files of a [`MaterializationRequest`] to disk.
///
/// The line terminator is fixed when the materializer is constructed and
/// shared by every file of every request it handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMaterializer {
    line_ending: LineEnding,
}

impl FileMaterializer {
    /// Creates a materializer using the native line ending of the target.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line_ending: LineEnding::native(),
        }
    }

    /// Overrides the line terminator.
    #[must_use]
    pub const fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns the line terminator in use.
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Writes every file in the request.
    ///
    /// Returns one result per input file, in input order. A failed write is
    /// recorded and processing continues with the next file. If a file name
    /// appears more than once, the later entry wins.
    #[must_use]
    pub fn materialize(&self, request: &MaterializationRequest) -> Vec<MaterializationResult> {
        let append = request.append_trailing_newline();

        let results: Vec<MaterializationResult> = request
            .files()
            .iter()
            .map(|spec| {
                let filename = spec.filename().to_string();
                match self.write_file(spec, append) {
                    Ok(()) => {
                        debug!(%filename, "wrote file");
                        MaterializationResult::Written { filename }
                    }
                    Err(e) => {
                        warn!(%filename, error = %e, "failed to write file");
                        MaterializationResult::Failed {
                            filename,
                            message: e.to_string(),
                        }
                    }
                }
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_failed()).count();
        info!(
            written = results.len() - failed,
            failed,
            line_ending = %self.line_ending,
            "materialized files"
        );

        results
    }

    /// Writes a single file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::WriteFailed` if the file cannot be opened or
    /// written, e.g. permission denied, missing parent directory, or a full
    /// disk.
    pub fn write_file(&self, spec: &FileSpec, append_trailing_newline: bool) -> Result<()> {
        let content = spec.content().expose_secret();
        let content = if append_trailing_newline {
            self.line_ending.terminate(content)
        } else {
            Cow::Borrowed(content)
        };

        overwrite(spec.filename().as_path(), content.as_bytes()).map_err(|source| {
            FilesError::WriteFailed {
                path: spec.filename().to_string(),
                source,
            }
        })
    }
}

impl Default for FileMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates or truncates `path` and writes `bytes` in full.
fn overwrite(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DEFAULT_FILE_MODE);
    }

    options.open(path)?.write_all(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileName;
    use std::fs;
    use tempfile::TempDir;

    fn spec(path: &Path, content: &str) -> FileSpec {
        FileSpec::new(FileName::new(path.to_string_lossy()), content)
    }

    #[test]
    fn test_write_file_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");

        FileMaterializer::new()
            .write_file(&spec(&path, "no newline"), false)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "no newline");
    }

    #[test]
    fn test_write_file_appends_terminator() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");

        FileMaterializer::new()
            .with_line_ending(LineEnding::Lf)
            .write_file(&spec(&path, "hello"), true)
            .unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"hello\n");
    }

    #[test]
    fn test_write_file_crlf() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        let materializer = FileMaterializer::new().with_line_ending(LineEnding::CrLf);

        materializer.write_file(&spec(&path, "hello"), true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello\r\n");

        materializer
            .write_file(&spec(&path, "hello\r\n"), true)
            .unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello\r\n");
    }

    #[test]
    fn test_write_file_truncates_longer_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        FileMaterializer::new()
            .write_file(&spec(&path, "short"), false)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_file_missing_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("a.txt");

        let err = FileMaterializer::new()
            .write_file(&spec(&path, "x"), false)
            .unwrap_err();

        assert!(err.is_write_failed());
        assert!(err.to_string().contains(&*path.to_string_lossy()));
    }

    #[test]
    fn test_unopenable_names_fail_in_input_position() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.txt");
        let request = MaterializationRequest::new(
            vec![
                FileSpec::new(FileName::new(""), "x"),
                spec(&good, "ok"),
                FileSpec::new(FileName::new("bad\0name"), "y"),
            ],
            false,
        );

        let results = FileMaterializer::new().materialize(&request);

        assert!(results[0].is_failed());
        assert_eq!(results[0].filename(), "");
        assert!(results[1].is_written());
        assert!(results[2].is_failed());
        assert!(results[2].error_message().unwrap().starts_with("Failed to write"));
        assert_eq!(fs::read_to_string(&good).unwrap(), "ok");
    }

    #[test]
    fn test_write_file_into_directory_fails() {
        let temp = TempDir::new().unwrap();

        let err = FileMaterializer::new()
            .write_file(&spec(temp.path(), "x"), false)
            .unwrap_err();

        assert!(err.is_write_failed());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mode.txt");

        FileMaterializer::new()
            .write_file(&spec(&path, "x"), false)
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // umask may only clear bits
        assert_eq!(mode & !DEFAULT_FILE_MODE, 0);
        assert_ne!(mode & 0o600, 0);
    }

    #[test]
    fn test_materialize_empty_request() {
        let results = FileMaterializer::new().materialize(&MaterializationRequest::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_materialize_result_order_matches_input() {
        let temp = TempDir::new().unwrap();
        let names = ["c.txt", "a.txt", "b.txt"];
        let files = names
            .iter()
            .map(|n| spec(&temp.path().join(n), n))
            .collect();

        let request = MaterializationRequest::new(files, false);
        let results = FileMaterializer::new().materialize(&request);

        let got: Vec<_> = results
            .iter()
            .map(|r| Path::new(r.filename()).file_name().unwrap().to_owned())
            .collect();
        assert_eq!(got, names.map(std::ffi::OsString::from));
    }

    #[test]
    fn test_default_uses_native_line_ending() {
        assert_eq!(FileMaterializer::default().line_ending(), LineEnding::native());
    }
}
