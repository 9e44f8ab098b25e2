use serde::{Deserialize, Serialize};
use skycast_screen::SelectionPolicy;
use skycast_weather::{DataSet, ForecastVariant, Locale};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{AppError, ConfigError};

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Forecast source settings
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Row expansion and place change behavior
    #[serde(default)]
    pub selection: SelectionPolicy,

    /// Place catalog override
    #[serde(default)]
    pub places: PlacesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default)]
    pub variant: ForecastVariant,

    #[serde(default)]
    pub data_set: DataSet,

    /// Fixed seed for the shuffled variant (random when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Locale for day and month labels, e.g. "en_US"
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            variant: ForecastVariant::default(),
            data_set: DataSet::default(),
            seed: None,
            locale: default_locale(),
        }
    }
}

impl ForecastConfig {
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        Locale::try_from(self.locale.as_str())
            .map_err(|_| ConfigError::UnknownLocale(self.locale.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Place names in display order. Empty means the built-in catalog.
    #[serde(default)]
    pub names: Vec<String>,
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self, AppError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read config file {}: {}", path.display(), e);
            e
        })?;

        Ok(Self::from_toml_str(&contents)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from the default location and validate it
    pub fn load_validated() -> Result<(Self, ValidationResult), AppError> {
        Self::load_validated_from(&Self::config_path()?)
    }

    /// Load configuration from `path` and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated_from(path: &Path) -> Result<(Self, ValidationResult), AppError> {
        let config = Self::load_from(path)?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Err(e) = self.forecast.locale() {
            result.add_error("forecast.locale", e.to_string());
        }

        if self.forecast.seed.is_some() && self.forecast.variant == ForecastVariant::Fixed {
            result.add_warning(
                "forecast.seed",
                "Seed has no effect with the fixed forecast variant",
            );
        }

        let mut seen = HashSet::new();
        for (i, name) in self.places.names.iter().enumerate() {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                result.add_error(format!("places.names[{}]", i), "Place name is blank");
            } else if !seen.insert(trimmed) {
                result.add_warning(
                    format!("places.names[{}]", i),
                    format!("Duplicate place name: {}", trimmed),
                );
            }
        }

        result
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create config directory {}: {}", parent.display(), e);
                e
            })?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, contents).map_err(|e| {
            tracing::error!("Failed to write config file {}: {}", path.display(), e);
            e
        })?;

        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_screen::{ExpandPolicy, PlaceChangePolicy};

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(
            r#"
            [forecast]
            variant = "fixed"
            data_set = "basic"
            locale = "fr_FR"

            [selection]
            expand = "collapse"
            place_change = "reset"
            initially_expanded = false

            [places]
            names = ["Lyon", "Nice"]
            "#,
        )
        .unwrap();

        assert_eq!(config.forecast.variant, ForecastVariant::Fixed);
        assert_eq!(config.forecast.data_set, DataSet::Basic);
        assert_eq!(config.forecast.locale().unwrap(), Locale::fr_FR);
        assert_eq!(config.selection.expand, ExpandPolicy::Collapse);
        assert_eq!(config.selection.place_change, PlaceChangePolicy::Reset);
        assert!(!config.selection.initially_expanded);
        assert_eq!(config.places.names, ["Lyon", "Nice"]);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = Config::from_toml_str("[forecast\nvariant =").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_variant_is_parse_error() {
        let err = Config::from_toml_str("[forecast]\nvariant = \"live\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_locale_is_error() {
        let mut config = Config::default();
        config.forecast.locale = "xx_YY".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "forecast.locale"));
    }

    #[test]
    fn test_blank_place_is_error_duplicate_is_warning() {
        let mut config = Config::default();
        config.places.names = vec!["Lyon".into(), " ".into(), "Lyon".into()];
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "places.names[1]"));
        assert!(result.warnings.iter().any(|w| w.field == "places.names[2]"));
    }

    #[test]
    fn test_seed_with_fixed_variant_is_warning() {
        let mut config = Config::default();
        config.forecast.variant = ForecastVariant::Fixed;
        config.forecast.seed = Some(4);
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "forecast.seed"));
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.forecast.seed = Some(12);
        config.places.names = vec!["Lyon".into()];
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_unreadable_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists at the path but cannot be read as a file.
        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "{:?}", err);
    }

    #[test]
    fn test_save_under_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = Config::default()
            .save_to(&blocker.join("config.toml"))
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "{:?}", err);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[selection]\nexpand = \"sideways\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_validated_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[forecast]\nlocale = \"xx_YY\"").unwrap();

        let err = Config::load_validated_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        assert_eq!(result.error_summary(), "field1: error1; field2: error2");
    }
}
