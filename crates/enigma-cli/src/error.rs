//! CLI error types.

use std::path::PathBuf;

use enigma_core::{ConfigError, LookupError};
use thiserror::Error;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input file could not be read.
    #[error("cannot read input {}: {source}", path.display())]
    ReadInput {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Output could not be written.
    #[error("cannot write output: {0}")]
    WriteOutput(#[source] std::io::Error),

    /// A line could not be encrypted.
    #[error("line {line_number}: {source}")]
    Lookup {
        /// 1-based line number in the input file.
        line_number: usize,
        /// Underlying lookup failure.
        #[source]
        source: LookupError,
    },
}

impl CliError {
    /// Returns true if the configuration, rather than the input data or the
    /// file system, caused the failure.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
