//! Core types and errors for the fastlocal provider.
//!
//! This crate provides the error hierarchy and CLI value types shared by the
//! provider adapter and the command-line front end. The file materializer in
//! `fastlocal-files` has its own narrower error type and does not depend on
//! this crate.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod error;

pub use error::{Error, Result};
