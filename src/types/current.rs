use crate::types::common::{Clouds, Main, Precipitation, Sys, Weather, Wind};
use crate::types::location::Coordinates;
use crate::types::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather for a single place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentWeatherData {
    pub coord: Coordinates,
    pub weather: Vec<Weather>,
    /// Internal parameter.
    pub base: String,
    pub main: Main,
    /// Meters, capped at 10 km.
    pub visibility: Option<u32>,
    pub wind: Wind,
    pub clouds: Clouds,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
    /// Time of the measurement.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub sys: Sys,
    /// Shift in seconds from UTC.
    pub timezone: Option<i32>,
    pub id: u64,
    pub name: String,
    #[serde(with = "serde_helpers::cod")]
    pub cod: String,
}

impl CurrentWeatherData {
    /// The first reported condition, which the API treats as the primary one.
    pub fn primary_weather(&self) -> Option<&Weather> {
        self.weather.first()
    }
}

/// Current weather for several city ids fetched in one request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentWeatherGroup {
    #[serde(alias = "count")]
    pub cnt: usize,
    pub list: Vec<CurrentWeatherData>,
}
