//! Command implementations for the fastlocal CLI.
//!
//! Each command builds a serializable report, prints it in the requested
//! output format, and returns an exit code.

pub mod completions;
pub mod read;
pub mod schema;
