//! Application-level error types.
//!
//! Library crates keep their own tagged errors; this module folds them into
//! one type the binaries can report with a user-facing message.

use realworld_fetch::{FailureKind, FetchError, ResourceError};
use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A remote resource could not be read. Displays the resource's fixed message.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The HTTP client could not be set up.
    #[error("HTTP client error: {0}")]
    Client(#[from] FetchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Location error: {0}")]
    Location(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a message suitable for the error view.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Resource(e) => match e.kind() {
                FailureKind::Transport => e.message().to_string(),
                FailureKind::Decode => {
                    format!("{} (unexpected response)", e.message())
                }
            },
            AppError::Client(_) => "Unable to start the network client.".to_string(),
            AppError::Config(e) => e.user_message().to_string(),
            AppError::Location(_) => "Unable to determine your location.".to_string(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::MissingSetting(_) => "A required setting is missing. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_error_displays_fixed_message() {
        let err: AppError = ResourceError::new(
            "An error occurred while trying to read comics",
            FetchError::RequestFailed { status: 500 },
        )
        .into();
        assert_eq!(err.to_string(), "An error occurred while trying to read comics");
        assert_eq!(err.user_message(), "An error occurred while trying to read comics");
    }

    #[test]
    fn test_decode_failure_is_flagged_for_user() {
        let err: AppError = ResourceError::new(
            "An error occurred while trying to search recipes",
            FetchError::MissingField("data"),
        )
        .into();
        assert!(err.user_message().contains("unexpected response"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = ConfigError::MissingSetting("marvel.api_key".into()).into();
        assert!(matches!(err, AppError::Config(ConfigError::MissingSetting(_))));
        assert_eq!(
            err.user_message(),
            "A required setting is missing. Check your settings."
        );
    }
}
