use crate::types::common::{Clouds, Main, Precipitation, Weather, Wind};
use crate::types::serde_helpers;
use crate::validation::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional bounds for a historical request.
///
/// `start` and `end` limit the window, `cnt` limits the number of hourly
/// entries returned (used instead of `end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoricalParameters {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub cnt: Option<u32>,
}

impl HistoricalParameters {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(ValidationError::InvalidTimeRange {
                    start: start.timestamp(),
                    end: end.timestamp(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start", start.timestamp().to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end", end.timestamp().to_string()));
        }
        if let Some(cnt) = self.cnt {
            pairs.push(("cnt", cnt.to_string()));
        }
        pairs
    }
}

/// One hourly observation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherHistory {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: Main,
    pub wind: Wind,
    pub clouds: Clouds,
    pub weather: Vec<Weather>,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
}

/// Hourly history for a city.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalWeatherData {
    pub message: String,
    #[serde(with = "serde_helpers::cod")]
    pub cod: String,
    pub city_id: u64,
    /// Server side calculation time in seconds.
    pub calctime: f64,
    pub cnt: usize,
    pub list: Vec<WeatherHistory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parameters_reject_reversed_range() {
        let params = HistoricalParameters {
            start: Utc.timestamp_opt(1_700_000_000, 0).single(),
            end: Utc.timestamp_opt(1_600_000_000, 0).single(),
            cnt: None,
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::InvalidTimeRange {
                start: 1_700_000_000,
                end: 1_600_000_000
            })
        );
    }

    #[test]
    fn test_parameters_query_pairs() {
        let params = HistoricalParameters {
            start: Utc.timestamp_opt(1_369_728_000, 0).single(),
            end: None,
            cnt: Some(24),
        };
        assert!(params.validate().is_ok());
        assert_eq!(
            params.query_pairs(),
            vec![("start", "1369728000".to_string()), ("cnt", "24".to_string())]
        );
        assert!(HistoricalParameters::default().query_pairs().is_empty());
    }

    #[test]
    fn test_decode_history() {
        let data: HistoricalWeatherData =
            serde_json::from_str(include_str!("../../tests/fixtures/history.json")).unwrap();
        assert_eq!(data.cod, "200");
        assert_eq!(data.city_id, 2885679);
        assert_eq!(data.cnt, 2);
        assert_eq!(data.list[0].main.temp, 281.14);
        assert_eq!(data.list[1].rain.as_ref().and_then(|r| r.one_hour), Some(0.3));
        assert_eq!(data.list[1].dt.timestamp(), 1369728000 + 3600);
    }
}
