//! fastlocal CLI library.
//!
//! Exposes the argument parser, command implementations, and output
//! formatters so they can be tested without spawning the binary.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

pub use cli::{Cli, Commands};
