//! Fetch error types.

use thiserror::Error;

/// Coarse failure class, for callers that only care where a fetch broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network error or non-success status.
    Transport,
    /// Body was not JSON or did not have the expected shape.
    Decode,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status {status}")]
    RequestFailed { status: u16 },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) | Self::RequestFailed { .. } => FailureKind::Transport,
            Self::Decode(_) | Self::MissingField(_) => FailureKind::Decode,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// A failed fetch re-signalled with a fixed, resource-specific message.
///
/// `Display` yields only the message; the underlying [`FetchError`] is kept
/// as the error source.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ResourceError {
    message: &'static str,
    #[source]
    cause: FetchError,
}

impl ResourceError {
    pub fn new(message: &'static str, cause: FetchError) -> Self {
        Self { message, cause }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn cause(&self) -> &FetchError {
        &self.cause
    }

    pub fn kind(&self) -> FailureKind {
        self.cause.kind()
    }

    pub fn into_cause(self) -> FetchError {
        self.cause
    }
}
