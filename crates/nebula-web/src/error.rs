//! Error types for nebula-web

use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for nebula-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nebula-web
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from nebula-content
    #[error("Content error: {0}")]
    Content(#[from] nebula_content::Error),

    /// Error from nebula-inquiry
    #[error("Inquiry error: {0}")]
    Inquiry(#[from] nebula_inquiry::Error),

    /// Page template failed to render
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration is missing or malformed
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// Socket I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    File {
        /// File or directory that was being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a file I/O error carrying the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
