//! The single failure kind returned by URL validation.

use thiserror::Error;

/// Message used when the caller does not supply one.
pub const DEFAULT_MESSAGE: &str = "is an invalid URL";

/// Category of a validation failure. There is one: callers learn that the
/// URL was rejected, not which check rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidUrl,
}

impl ErrorKind {
    /// Stable identifier, e.g. for message catalogs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidUrl => "invalid_url",
        }
    }
}

/// A candidate failed structural URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidUrl {
    message: String,
}

impl InvalidUrl {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidUrl
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for InvalidUrl {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}
