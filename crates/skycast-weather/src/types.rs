use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition categories shown on a forecast row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Wind,
    Clouds,
    Drizzle,
    Rain,
    Thunderstorm,
    Storm,
    Snow,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 8] = [
        Self::Clear,
        Self::Wind,
        Self::Clouds,
        Self::Drizzle,
        Self::Rain,
        Self::Thunderstorm,
        Self::Storm,
        Self::Snow,
    ];

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Wind => "Wind",
            Self::Clouds => "Clouds",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Thunderstorm => "Thunderstorm",
            Self::Storm => "Storm",
            Self::Snow => "Snow",
        }
    }

    /// String resource key for the description; the UI resolves it
    pub fn description_key(&self) -> &'static str {
        match self {
            Self::Clear => "description_clear",
            Self::Wind => "description_wind",
            Self::Clouds => "description_clouds",
            Self::Drizzle => "description_drizzle",
            Self::Rain => "description_rain",
            Self::Thunderstorm => "description_thunderstorm",
            Self::Storm => "description_storm",
            Self::Snow => "description_snow",
        }
    }

    /// Drawable resource key for the condition icon
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "ic_clear",
            Self::Wind => "ic_wind",
            Self::Clouds => "ic_clouds",
            Self::Drizzle => "ic_drizzle",
            Self::Rain => "ic_rain",
            Self::Thunderstorm => "ic_thunderstorm",
            Self::Storm => "ic_storm",
            Self::Snow => "ic_snow",
        }
    }
}

/// Daily temperature range in display degrees.
///
/// `real_feel` is only populated by the extended data set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub min: f32,
    pub max: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_feel: Option<f32>,
}

impl Temperature {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            real_feel: None,
        }
    }

    pub fn with_real_feel(mut self, real_feel: f32) -> Self {
        self.real_feel = Some(real_feel);
        self
    }
}

/// Extra metrics revealed when a row is expanded. Values are display strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedMetrics {
    pub chance_of_rain: String,
    pub wind_speed: String,
    pub humidity: String,
    pub pressure: String,
    pub uv_index: String,
}

/// Everything a forecast row shows except its date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayConditions {
    pub temperature: Temperature,
    pub weather: WeatherCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ExtendedMetrics>,
}

/// A single day of the forecast list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub conditions: DayConditions,
}

impl ForecastEntry {
    pub fn new(date: NaiveDate, conditions: DayConditions) -> Self {
        Self { date, conditions }
    }

    pub fn temperature(&self) -> &Temperature {
        &self.conditions.temperature
    }

    pub fn weather(&self) -> WeatherCondition {
        self.conditions.weather
    }

    pub fn metrics(&self) -> Option<&ExtendedMetrics> {
        self.conditions.metrics.as_ref()
    }

    /// Upper-cased abbreviated weekday, e.g. "FRI"
    pub fn day_of_week(&self, locale: Locale) -> String {
        format_date(self.date, "%a", locale).to_uppercase()
    }

    /// Two-digit day of month, e.g. "06"
    pub fn day_of_month(&self) -> String {
        self.date.format("%d").to_string()
    }

    /// Upper-cased abbreviated month, e.g. "OCT"
    pub fn month(&self, locale: Locale) -> String {
        format_date(self.date, "%b", locale).to_uppercase()
    }

    pub fn labels(&self, locale: Locale) -> DateLabels {
        DateLabels {
            day_of_week: self.day_of_week(locale),
            day_of_month: self.day_of_month(),
            month: self.month(locale),
        }
    }
}

/// Date captions rendered in the left column of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateLabels {
    pub day_of_week: String,
    pub day_of_month: String,
    pub month: String,
}

// Localized formatting is only available on zoned date-times.
fn format_date(date: NaiveDate, fmt: &str, locale: Locale) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized(fmt, locale)
        .to_string()
}

/// A selectable location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Place {
    pub display_name: String,
}

impl Place {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// Place catalog errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Place catalog is empty")]
    Empty,
    #[error("Place at position {0} has a blank name")]
    BlankName(usize),
}

impl CatalogError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::Empty => "No places are configured. Add at least one place.",
            CatalogError::BlankName(_) => "A place has no name. Check your place list.",
        }
    }
}
