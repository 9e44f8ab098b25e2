//! Forecast data for skycast
//!
//! Provides the forecast data model, the built-in place catalog, the canned
//! seven-day sample sets and the providers that deal them out per place.

pub mod places;
pub mod provider;
pub mod sample;
pub mod types;

pub use places::PlaceCatalog;
pub use provider::{
    build_provider, FixedForecasts, ForecastProvider, ForecastVariant, ShuffledForecasts,
};
pub use sample::{week_of, DataSet, FORECAST_DAYS};
pub use types::*;

/// Locale type accepted by the date label functions
pub use chrono::Locale;
