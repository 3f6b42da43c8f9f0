//! Schemas for the one call endpoint, which bundles current conditions,
//! minutely/hourly/daily forecasts and weather alerts in one response.

use crate::types::common::{FeelsLike, Precipitation, Temperature, Weather};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A section of the one call response that can be left out of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exclude {
    Current,
    Minutely,
    Hourly,
    Daily,
    Alerts,
}

impl Exclude {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exclude::Current => "current",
            Exclude::Minutely => "minutely",
            Exclude::Hourly => "hourly",
            Exclude::Daily => "daily",
            Exclude::Alerts => "alerts",
        }
    }

    /// Joins `excludes` into the `exclude` query value, dropping repeats.
    ///
    /// ```
    /// use openweathermap::Exclude;
    ///
    /// let joined = Exclude::join(&[Exclude::Hourly, Exclude::Alerts, Exclude::Hourly]);
    /// assert_eq!(joined, "hourly,alerts");
    /// assert_eq!(Exclude::join(&[]), "");
    /// ```
    pub fn join(excludes: &[Exclude]) -> String {
        let mut seen: Vec<Exclude> = Vec::with_capacity(excludes.len());
        for exclude in excludes {
            if !seen.contains(exclude) {
                seen.push(*exclude);
            }
        }
        seen.iter()
            .map(Exclude::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Exclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OneCallCurrent {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunset: Option<DateTime<Utc>>,
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub dew_point: f64,
    pub uvi: f64,
    pub clouds: u8,
    pub visibility: Option<u32>,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub wind_gust: Option<f64>,
    pub weather: Vec<Weather>,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
}

/// Precipitation in mm for one minute of the coming hour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OneCallMinutely {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub precipitation: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OneCallHourly {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub dew_point: f64,
    pub uvi: f64,
    pub clouds: u8,
    pub visibility: Option<u32>,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub wind_gust: Option<f64>,
    pub weather: Vec<Weather>,
    pub pop: f64,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OneCallDaily {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunset: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub moonrise: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub moonset: Option<DateTime<Utc>>,
    /// 0 and 1 are new moon, 0.5 is full moon.
    pub moon_phase: f64,
    pub temp: Temperature,
    pub feels_like: FeelsLike,
    pub pressure: f64,
    pub humidity: f64,
    pub dew_point: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    pub wind_gust: Option<f64>,
    pub weather: Vec<Weather>,
    pub clouds: u8,
    pub pop: f64,
    pub uvi: f64,
    /// mm
    pub rain: Option<f64>,
    /// mm
    pub snow: Option<f64>,
}

/// A national weather alert covering the requested location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub sender_name: String,
    pub event: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: DateTime<Utc>,
    pub description: String,
    pub tags: Vec<String>,
}

/// Response of both the forecast and the historical (time machine) one call.
///
/// Sections excluded from the request, or not provided for the location,
/// decode as `None` or an empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OneCallData {
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub timezone_offset: i32,
    pub current: Option<OneCallCurrent>,
    pub minutely: Vec<OneCallMinutely>,
    pub hourly: Vec<OneCallHourly>,
    pub daily: Vec<OneCallDaily>,
    pub alerts: Vec<Alert>,
}
