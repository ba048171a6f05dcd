//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or validating [`Params`](super::params::Params).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access config file {}: {source}", path.display())]
    Io {
        /// File that was accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for [`Params`](super::params::Params).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
