//! Cipher error types.

use std::path::PathBuf;

use thiserror::Error;

/// A character was missing from one of the engine's tables.
///
/// Lookup failures abort the line being encrypted. They are never transient:
/// the same line will fail the same way against the same configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Letter has no entry in the substitution table.
    #[error("letter {letter:?} is not in the substitution table")]
    UnknownLetter {
        /// The letter that was looked up.
        letter: char,
    },

    /// No letter in the substitution table maps to this number.
    #[error("no letter maps to {number} in the substitution table")]
    UnmappedNumber {
        /// The number that was looked up.
        number: i64,
    },

    /// Letter has no entry in the reflector.
    #[error("letter {letter:?} is not in the reflector")]
    UnknownReflection {
        /// The letter that was looked up.
        letter: char,
    },
}

/// Configuration could not be loaded.
///
/// Raised before any engine exists, so a configuration problem never
/// surfaces as a lookup failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not a valid engine configuration.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file is not a valid engine configuration.
    #[error("invalid config {}: {source}", path.display())]
    ParseFile {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
