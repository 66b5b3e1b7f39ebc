//! Command-line arguments.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Write declared files to local disk.
#[derive(Parser, Debug)]
#[command(name = "fastlocal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the `fastlocal_file` data source.
    ///
    /// Loads the configuration document, writes every declared file, and
    /// prints the scrubbed state together with any diagnostics. Exits with
    /// status 1 if any diagnostic is an error.
    ///
    /// The document is TOML when the file name ends in `.toml`, JSON
    /// otherwise:
    ///
    /// ```json
    /// {
    ///   "files": [
    ///     { "filename": "out/app.conf", "file_contents": "key = value" }
    ///   ],
    ///   "add_newline_at_end": true
    /// }
    /// ```
    #[command(visible_alias = "apply")]
    Read {
        /// Path to the configuration document
        config: PathBuf,

        /// Write the scrubbed state as JSON to this path
        #[arg(long)]
        state_out: Option<PathBuf>,
    },

    /// Print the provider and data source schemas.
    Schema {
        /// Print the JSON Schema of the configuration document instead
        #[arg(long)]
        json_schema: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}
