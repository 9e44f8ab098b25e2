//! Canned seven-day payloads backing the forecast screen.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{DayConditions, ExtendedMetrics, ForecastEntry, Temperature, WeatherCondition};

/// Length of every forecast sequence
pub const FORECAST_DAYS: usize = 7;

/// Which sample payload set to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSet {
    /// Temperature range and condition only
    Basic,
    /// Adds real-feel and the expanded-row metrics
    #[default]
    Extended,
}

impl DataSet {
    pub fn payloads(self) -> Vec<DayConditions> {
        match self {
            DataSet::Basic => basic_payloads(),
            DataSet::Extended => extended_payloads(),
        }
    }
}

/// Pair payload `i` with `today + i` days.
pub fn week_of(today: NaiveDate, payloads: Vec<DayConditions>) -> Vec<ForecastEntry> {
    payloads
        .into_iter()
        .enumerate()
        .map(|(offset, conditions)| {
            ForecastEntry::new(today + Days::new(offset as u64), conditions)
        })
        .collect()
}

fn basic(min: f32, max: f32, weather: WeatherCondition) -> DayConditions {
    DayConditions {
        temperature: Temperature::new(min, max),
        weather,
        metrics: None,
    }
}

fn basic_payloads() -> Vec<DayConditions> {
    use WeatherCondition::*;
    vec![
        basic(68.18, 77.9, Clear),
        basic(65.3, 73.38, Wind),
        basic(55.47, 62.98, Clouds),
        basic(58.33, 63.32, Drizzle),
        basic(55.53, 59.38, Rain),
        basic(50.11, 53.76, Thunderstorm),
        basic(31.89, 43.86, Snow),
    ]
}

struct Extended {
    min: f32,
    max: f32,
    real_feel: f32,
    weather: WeatherCondition,
    chance_of_rain: &'static str,
    wind_speed: &'static str,
    humidity: &'static str,
    pressure: &'static str,
    uv_index: &'static str,
}

fn extended(e: Extended) -> DayConditions {
    DayConditions {
        temperature: Temperature::new(e.min, e.max).with_real_feel(e.real_feel),
        weather: e.weather,
        metrics: Some(ExtendedMetrics {
            chance_of_rain: e.chance_of_rain.to_string(),
            wind_speed: e.wind_speed.to_string(),
            humidity: e.humidity.to_string(),
            pressure: e.pressure.to_string(),
            uv_index: e.uv_index.to_string(),
        }),
    }
}

fn extended_payloads() -> Vec<DayConditions> {
    use WeatherCondition::*;
    let days = [
        Extended {
            min: 68.1,
            max: 77.9,
            real_feel: 79.2,
            weather: Clear,
            chance_of_rain: "0%",
            wind_speed: "4 mph",
            humidity: "41%",
            pressure: "1021 hPa",
            uv_index: "7 High",
        },
        Extended {
            min: 65.3,
            max: 73.3,
            real_feel: 70.4,
            weather: Wind,
            chance_of_rain: "5%",
            wind_speed: "21 mph",
            humidity: "38%",
            pressure: "1016 hPa",
            uv_index: "6 High",
        },
        Extended {
            min: 55.4,
            max: 62.9,
            real_feel: 60.1,
            weather: Clouds,
            chance_of_rain: "20%",
            wind_speed: "9 mph",
            humidity: "62%",
            pressure: "1012 hPa",
            uv_index: "3 Moderate",
        },
        Extended {
            min: 54.2,
            max: 60.8,
            real_feel: 57.6,
            weather: Rain,
            chance_of_rain: "85%",
            wind_speed: "12 mph",
            humidity: "88%",
            pressure: "1004 hPa",
            uv_index: "1 Low",
        },
        Extended {
            min: 51.0,
            max: 57.5,
            real_feel: 52.3,
            weather: Storm,
            chance_of_rain: "95%",
            wind_speed: "31 mph",
            humidity: "93%",
            pressure: "996 hPa",
            uv_index: "1 Low",
        },
        Extended {
            min: 47.6,
            max: 55.1,
            real_feel: 49.9,
            weather: Clouds,
            chance_of_rain: "35%",
            wind_speed: "11 mph",
            humidity: "71%",
            pressure: "1008 hPa",
            uv_index: "2 Low",
        },
        Extended {
            min: 31.8,
            max: 43.8,
            real_feel: 27.5,
            weather: Snow,
            chance_of_rain: "60%",
            wind_speed: "14 mph",
            humidity: "80%",
            pressure: "1010 hPa",
            uv_index: "1 Low",
        },
    ];
    days.into_iter().map(extended).collect()
}
