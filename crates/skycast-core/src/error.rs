//! Centralized error types for skycast.
//!
//! The forecast screen itself never fails; errors only come from building it
//! (configuration, place list, config file access). Use `user_message()` for UI text.

use skycast_weather::CatalogError;
use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Place catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Catalog(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Configuration serialize error: {0}")]
    SerializeError(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("No configuration directory on this platform")]
    NoConfigDir,
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::SerializeError(_) => "Settings could not be saved. Please try again.",
            ConfigError::UnknownLocale(_) => "The configured language is not supported.",
            ConfigError::NoConfigDir => "No settings folder is available on this system.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = [
            AppError::Config(ConfigError::Invalid("test".into())),
            AppError::Config(ConfigError::ParseError("test".into())),
            AppError::Config(ConfigError::SerializeError("test".into())),
            AppError::Config(ConfigError::UnknownLocale("xx".into())),
            AppError::Config(ConfigError::NoConfigDir),
            AppError::Catalog(CatalogError::Empty),
            AppError::Io(std::io::Error::other("disk")),
        ];

        for err in &errors {
            assert!(!err.user_message().is_empty(), "{:?}", err);
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let app_err: AppError = CatalogError::BlankName(0).into();
        assert!(matches!(app_err, AppError::Catalog(CatalogError::BlankName(0))));
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Config(ConfigError::UnknownLocale("xx_YY".into()));
        assert_eq!(
            app_err.user_message(),
            "The configured language is not supported."
        );
        assert_eq!(app_err.to_string(), "Configuration error: Unknown locale: xx_YY");
    }
}
