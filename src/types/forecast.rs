//! Schemas for the 5 day / 3 hour forecast and the 16 day daily forecast.

use crate::types::common::{City, Clouds, FeelsLike, Main, Precipitation, Temperature, Weather, Wind};
use crate::types::serde_helpers;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Part of day a forecast entry falls in: `d` (day) or `n` (night).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastItemSys {
    pub pod: String,
}

/// One 3-hour step of the 5 day forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast5Item {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: Main,
    pub weather: Vec<Weather>,
    pub clouds: Clouds,
    pub wind: Wind,
    pub visibility: Option<u32>,
    /// Probability of precipitation, 0 to 1.
    pub pop: Option<f64>,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
    pub sys: Option<ForecastItemSys>,
    #[serde(with = "serde_helpers::dt_txt")]
    pub dt_txt: Option<NaiveDateTime>,
}

/// 5 day forecast in 3-hour steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast5WeatherData {
    pub city: City,
    pub cnt: usize,
    pub list: Vec<Forecast5Item>,
}

/// One day of the daily forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast16Item {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub sunset: Option<DateTime<Utc>>,
    pub temp: Temperature,
    pub feels_like: Option<FeelsLike>,
    pub pressure: f64,
    pub humidity: f64,
    pub weather: Vec<Weather>,
    /// Wind speed.
    pub speed: f64,
    /// Wind direction in meteorological degrees.
    pub deg: f64,
    pub gust: Option<f64>,
    pub clouds: u8,
    pub pop: Option<f64>,
    /// Precipitation volume in mm.
    pub rain: Option<f64>,
    /// Snow volume in mm.
    pub snow: Option<f64>,
}

/// Daily forecast for up to 16 days.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast16WeatherData {
    pub city: City,
    pub cnt: usize,
    pub list: Vec<Forecast16Item>,
}

impl Forecast16WeatherData {
    /// Lowest and highest temperature over the whole forecast.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        self.list.iter().fold(None, |range, item| {
            let (lo, hi) = range.unwrap_or((item.temp.min, item.temp.max));
            Some((lo.min(item.temp.min), hi.max(item.temp.max)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_decode_five_day_forecast() {
        let data: Forecast5WeatherData =
            serde_json::from_str(include_str!("../../tests/fixtures/forecast5.json")).unwrap();
        assert_eq!(data.cnt, 2);
        assert_eq!(data.city.name, "Berlin");
        assert_eq!(data.city.population, 1000000);
        let first = &data.list[0];
        assert_eq!(
            first.dt_txt,
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(15, 0, 0))
        );
        assert_eq!(first.dt.naive_utc(), first.dt_txt.unwrap());
        assert_eq!(first.main.temp_kf, Some(-0.56));
        assert_eq!(first.pop, Some(0.32));
        assert_eq!(first.rain.as_ref().and_then(|r| r.three_hours), Some(0.42));
        assert_eq!(first.sys.as_ref().map(|s| s.pod.as_str()), Some("d"));
        assert!(data.list[1].rain.is_none());
    }

    #[test]
    fn test_decode_daily_forecast() {
        let data: Forecast16WeatherData =
            serde_json::from_str(include_str!("../../tests/fixtures/forecast16.json")).unwrap();
        assert_eq!(data.cnt, 2);
        assert_eq!(data.city.id, 2950159);
        assert_eq!(data.list[0].temp.max, 21.3);
        assert_eq!(data.list[0].speed, 3.7);
        assert_eq!(data.list[1].rain, Some(2.6));
        assert_eq!(data.temperature_range(), Some((8.2, 21.3)));
    }

    #[test]
    fn test_empty_daily_forecast_has_no_range() {
        assert_eq!(Forecast16WeatherData::default().temperature_range(), None);
    }
}
