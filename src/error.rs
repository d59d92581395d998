//! Error types for configuration and catalog loading.
//!
//! The engines themselves never fail; only the surfaces that read external
//! data or validate caller-supplied definitions return these errors.

use std::path::PathBuf;

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading configuration or validating definitions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a configuration file failed.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// TOML input could not be parsed.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON input could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two columns in one column set share an id.
    #[error("duplicate column id '{id}'")]
    DuplicateColumn {
        /// The repeated id.
        id: String,
    },

    /// A catalog section prefix is empty after normalization, e.g. `/`.
    #[error("navigation section prefix '{prefix}' is empty")]
    EmptySectionPrefix {
        /// The prefix as written.
        prefix: String,
    },

    /// Two catalog sections share a normalized prefix.
    #[error("duplicate navigation section '{prefix}'")]
    DuplicateSection {
        /// The repeated prefix.
        prefix: String,
    },
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
