//! Error types for nebula-content

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for nebula-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or exporting site content
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Content file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid TOML or does not match the schema
    #[error("Failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    /// Content could not be serialized back to TOML
    #[error("Failed to serialize content: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Content parsed but a record is unusable
    #[error("Invalid content: {message}")]
    Invalid {
        /// What is wrong with the content
        message: String,
    },
}

impl Error {
    /// Creates an I/O error carrying the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an invalid-content error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::Invalid {
            message: message.into(),
        }
    }
}
