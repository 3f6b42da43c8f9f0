//! Building blocks shared by several response schemas.

use crate::types::location::Coordinates;
use crate::types::weather_condition::WeatherCondition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// High level description of the weather, one entry per active condition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Weather {
    /// Condition code, see [`WeatherCondition`].
    pub id: u16,
    /// Condition group, e.g. `"Rain"`.
    pub main: String,
    /// Condition within the group, translated into the request language.
    pub description: String,
    /// Icon id such as `"10d"`, see [`crate::retrieve_icon`].
    pub icon: String,
}

impl Weather {
    /// Looks the condition code up in the condition table.
    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_code(self.id)
    }

    /// File name of the icon as served by the icon endpoint.
    pub fn icon_file(&self) -> String {
        format!("{}.png", self.icon)
    }
}

/// Temperature, pressure and humidity readings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// hPa, at sea level when `sea_level` is absent.
    pub pressure: f64,
    pub sea_level: Option<f64>,
    pub grnd_level: Option<f64>,
    /// Percent.
    pub humidity: f64,
    /// Internal forecast correction, only present on forecast entries.
    pub temp_kf: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub speed: f64,
    /// Meteorological degrees.
    pub deg: f64,
    pub gust: Option<f64>,
}

/// Cloud cover in percent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Clouds {
    pub all: u8,
}

/// Precipitation volume in mm over the last hour or three hours.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h", default, skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", default, skip_serializing_if = "Option::is_none")]
    pub three_hours: Option<f64>,
}

/// Country and daylight information attached to current weather.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sys {
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    pub id: Option<i64>,
    pub message: Option<f64>,
    pub country: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunset: Option<DateTime<Utc>>,
}

/// The place a forecast was produced for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    pub id: u64,
    pub name: String,
    pub coord: Coordinates,
    pub country: String,
    pub population: u64,
    /// Shift in seconds from UTC.
    pub timezone: Option<i32>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunset: Option<DateTime<Utc>>,
}

/// Daily temperature profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Temperature {
    pub day: f64,
    pub min: f64,
    pub max: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

/// Daily apparent temperature profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeelsLike {
    pub day: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precipitation_keys() {
        let rain: Precipitation = serde_json::from_str(r#"{"3h":1.25}"#).unwrap();
        assert_eq!(rain.three_hours, Some(1.25));
        assert_eq!(rain.one_hour, None);
        assert_eq!(serde_json::to_string(&rain).unwrap(), r#"{"3h":1.25}"#);
    }

    #[test]
    fn test_sys_timestamps() {
        let sys: Sys =
            serde_json::from_str(r#"{"type":1,"country":"GB","sunrise":1714538400}"#).unwrap();
        assert_eq!(sys.kind, Some(1));
        assert_eq!(sys.sunrise.map(|t| t.timestamp()), Some(1714538400));
        assert_eq!(sys.sunset, None);
    }

    #[test]
    fn test_weather_condition_lookup() {
        let weather = Weather {
            id: 501,
            main: "Rain".into(),
            description: "moderate rain".into(),
            icon: "10d".into(),
        };
        assert_eq!(weather.condition().map(|c| c.meaning), Some("moderate rain"));
        assert_eq!(weather.icon_file(), "10d.png");
    }
}
