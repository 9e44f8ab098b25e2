use chrono::{Local, NaiveDate};
use skycast_screen::ForecastScreen;
use skycast_weather::{build_provider, PlaceCatalog};
use std::path::Path;

use crate::error::{AppError, ConfigError};
use crate::Config;

/// Main application state: configuration plus the forecast screen built from it
pub struct App {
    config: Config,
    screen: ForecastScreen,
}

impl App {
    /// Create a new application instance from the on-disk configuration
    pub fn new() -> Result<Self, AppError> {
        let (config, _) = Config::load_validated()?;
        Self::from_config(config, Local::now().date_naive())
    }

    /// Create an application from the configuration file at `path`
    pub fn load(path: &Path, today: NaiveDate) -> Result<Self, AppError> {
        let (config, _) = Config::load_validated_from(path)?;
        Self::from_config(config, today)
    }

    /// Build the application for an explicit configuration and calendar day
    pub fn from_config(config: Config, today: NaiveDate) -> Result<Self, AppError> {
        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        let locale = config.forecast.locale()?;
        let catalog = if config.places.names.is_empty() {
            PlaceCatalog::builtin()
        } else {
            PlaceCatalog::from_names(config.places.names.iter().map(|n| n.trim()))?
        };
        let provider = build_provider(
            config.forecast.variant,
            config.forecast.data_set,
            today,
            config.forecast.seed,
        );

        tracing::info!(
            "Starting with {:?} {:?} forecasts from {} for {} places",
            config.forecast.variant,
            config.forecast.data_set,
            today,
            catalog.len()
        );

        let screen = ForecastScreen::new(catalog, provider, config.selection, locale);
        Ok(Self { config, screen })
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> &ForecastScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ForecastScreen {
        &mut self.screen
    }

    pub fn shutdown(&mut self) {
        tracing::info!(
            "Shutting down on {}",
            self.screen.selected_place().display_name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_weather::{DataSet, ForecastVariant};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_default_config_builds_screen() {
        let app = App::from_config(Config::default(), today()).unwrap();
        assert_eq!(app.screen().forecasts().len(), 7);
        assert_eq!(app.screen().selected_place().display_name, "Seattle, WA");
    }

    #[test]
    fn test_custom_places_are_trimmed() {
        let mut config = Config::default();
        config.places.names = vec![" Lyon ".into(), "Nice".into()];
        let app = App::from_config(config, today()).unwrap();
        assert_eq!(app.screen().places()[0].display_name, "Lyon");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.forecast.locale = "nope".into();
        let err = App::from_config(config, today()).err().unwrap();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_writes_defaults_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let app = App::load(&path, today()).unwrap();
        assert_eq!(app.config(), &Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = App::load(dir.path(), today()).err().unwrap();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.user_message(), "A file operation failed. Please try again.");
    }

    #[test]
    fn test_seeded_apps_agree() {
        let mut config = Config::default();
        config.forecast.variant = ForecastVariant::Shuffled;
        config.forecast.data_set = DataSet::Basic;
        config.forecast.seed = Some(8);

        let mut a = App::from_config(config.clone(), today()).unwrap();
        let mut b = App::from_config(config, today()).unwrap();
        a.screen_mut().choose_place(2);
        b.screen_mut().choose_place(2);
        assert_eq!(a.screen().forecasts(), b.screen().forecasts());
    }
}
