//! Local file materialization.
//!
//! Takes an ordered list of declared files and writes each one to disk,
//! optionally terminating its content with the platform line ending. Every
//! write replaces the existing file unconditionally, and a failure on one
//! file never stops the remaining files from being written.
//!
//! # Features
//!
//! - **Whole-buffer writes**: each file is truncated and written in full
//! - **Per-file outcomes**: one [`MaterializationResult`] per input, in order
//! - **Sensitive content**: contents are held as [`secrecy::SecretString`]
//!   and never appear in `Debug`, logs, or serialized results
//!
//! # Examples
//!
//! ```
//! use fastlocal_files::{FileMaterializer, RequestBuilder};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let path = temp.path().join("a.txt");
//! let request = RequestBuilder::new()
//!     .add_file(path.to_string_lossy(), "hello")
//!     .append_trailing_newline(true)
//!     .build();
//!
//! let results = FileMaterializer::new().materialize(&request);
//! assert!(results[0].is_written());
//!
//! # #[cfg(not(windows))]
//! assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod line_ending;
pub mod materializer;
pub mod types;

// Re-export main types
pub use builder::RequestBuilder;
pub use line_ending::LineEnding;
pub use materializer::{DEFAULT_FILE_MODE, FileMaterializer};
pub use types::{
    FileName, FileSpec, FilesError, MaterializationRequest, MaterializationResult, Result,
};
