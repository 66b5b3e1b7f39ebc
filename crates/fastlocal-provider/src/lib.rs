//! Provider adapter for the fastlocal file materializer.
//!
//! The orchestration host talks to a provider, never to the materializer
//! directly. This crate models that surface without the plugin wire
//! handshake:
//!
//! - [`FastLocalProvider`] carries metadata and hands out data sources
//! - [`FileDataSource`] (`fastlocal_file`) decodes its configuration, writes
//!   the declared files, and returns a scrubbed state plus diagnostics
//! - [`Schema`] describes the attributes each data source accepts
//! - [`Diagnostics`] collects errors and warnings for the host to display
//!
//! # Examples
//!
//! ```
//! use fastlocal_provider::{FastLocalProvider, ReadRequest};
//! use serde_json::json;
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let target = temp.path().join("hello.txt");
//! let provider = FastLocalProvider::new("test");
//! let data_source = provider.data_source("fastlocal_file").unwrap();
//!
//! let response = data_source.read(ReadRequest::new(json!({
//!     "files": [{ "filename": target.to_string_lossy(), "file_contents": "hi" }],
//! })));
//!
//! assert!(!response.diagnostics.has_error());
//! assert_eq!(response.state.unwrap()["files"][0]["file_contents"], json!(null));
//! assert_eq!(std::fs::read_to_string(&target).unwrap(), "hi");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod config;
pub mod diagnostics;
pub mod file_data_source;
pub mod provider;
pub mod schema;

pub use config::{ConfigFormat, load_config, parse_config};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use file_data_source::{
    FileDataSource, FileDataSourceModel, FileDataSourceState, FileModel, FileState,
};
pub use provider::{DataSource, FastLocalProvider, ProviderMetadata, ReadRequest, ReadResponse};
pub use schema::{Attribute, AttributeKind, Schema};
