//! Error types for nebula-inquiry.

use std::fmt;

/// A required contact-form field that was empty after trimming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    /// The sender's name.
    Name,
    /// The sender's email address.
    Email,
    /// The message body.
    Message,
}

impl RequiredField {
    /// Form field name as submitted by the browser.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a contact submission was not recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was missing or whitespace-only.
    #[error("required field '{0}' is empty")]
    MissingField(RequiredField),
}

/// Errors that can occur while recording or reading inquiries.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Submission failed the presence checks.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience `Result` type alias for inquiry operations.
pub type Result<T> = std::result::Result<T, Error>;
