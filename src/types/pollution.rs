use crate::types::location::Coordinates;
use crate::validation::error::ValidationError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aliases the pollution endpoint accepts in place of a timestamp.
pub const DATETIME_ALIASES: &[&str] = &["current"];

/// The moment a pollution request asks about.
///
/// Either the `current` alias or an ISO 8601 timestamp at any precision the
/// endpoint understands: `2016`, `2016-01`, `2016-01-02`, `2016-01-02T15:04Z`
/// or a full RFC 3339 timestamp. Coarser timestamps select every measurement
/// within that period.
///
/// ```
/// use openweathermap::PollutionDateTime;
///
/// assert_eq!("current".parse::<PollutionDateTime>().unwrap(), PollutionDateTime::CURRENT);
/// assert!("2016-01-02T15:04Z".parse::<PollutionDateTime>().is_ok());
/// assert!("2016-1-2".parse::<PollutionDateTime>().is_err());
/// assert!("yesterday".parse::<PollutionDateTime>().is_err());
/// ```
///
/// Timestamps can only be built through [`FromStr`], so every value placed in
/// a request path has been validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PollutionDateTime(Moment);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Moment {
    #[default]
    Current,
    Timestamp(String),
}

impl PollutionDateTime {
    /// The `current` alias.
    pub const CURRENT: PollutionDateTime = PollutionDateTime(Moment::Current);

    pub fn is_current(&self) -> bool {
        self.0 == Moment::Current
    }

    pub fn as_str(&self) -> &str {
        match &self.0 {
            Moment::Current => DATETIME_ALIASES[0],
            Moment::Timestamp(ts) => ts,
        }
    }
}

pub fn is_valid_alias(alias: &str) -> bool {
    DATETIME_ALIASES.contains(&alias)
}

/// Year is four digits, every other date field two.
fn has_padded_date(value: &str) -> bool {
    let date = value.split_once('T').map_or(value, |(date, _)| date);
    date.split('-').enumerate().all(|(i, field)| {
        let width = if i == 0 { 4 } else { 2 };
        field.len() == width && field.bytes().all(|b| b.is_ascii_digit())
    })
}

fn is_iso8601(value: &str) -> bool {
    if !has_padded_date(value) {
        return false;
    }
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }
    let minute_precision = value
        .strip_suffix('Z')
        .filter(|v| v.len() == "2016-01-02T15:04".len())
        .is_some_and(|v| NaiveDateTime::parse_from_str(v, "%Y-%m-%dT%H:%M").is_ok());
    if minute_precision {
        return true;
    }
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return true;
    }
    // Year-month and year alone are completed to the first day before parsing.
    let year_month = value.len() == 7
        && NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").is_ok();
    let year = value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit());
    year_month || year
}

impl FromStr for PollutionDateTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if is_valid_alias(s) {
            Ok(PollutionDateTime::CURRENT)
        } else if is_iso8601(s) {
            Ok(PollutionDateTime(Moment::Timestamp(s.to_string())))
        } else {
            Err(ValidationError::InvalidDateTime(s.to_string()))
        }
    }
}

impl fmt::Display for PollutionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single carbon monoxide measurement at one pressure level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PollutionData {
    pub precision: f64,
    /// Atmospheric pressure level in hPa.
    pub pressure: f64,
    /// Volume mixing ratio.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pollution {
    pub time: String,
    pub location: Coordinates,
    pub data: Vec<PollutionData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_validation() {
        assert!(is_valid_alias("current"));
        assert!(!is_valid_alias("now"));
    }

    #[test]
    fn test_timestamp_precisions() {
        for ok in [
            "2016",
            "2016-01",
            "2016-01-02",
            "2016-01-02T15:04Z",
            "2016-01-02T15:04:05Z",
            "2016-01-02T15:04:05+02:00",
        ] {
            let parsed = ok.parse::<PollutionDateTime>().unwrap();
            assert_eq!(parsed.as_str(), ok);
            assert!(!parsed.is_current());
        }
        for bad in [
            "16",
            "2016-13",
            "2016-01-32",
            "01/02/2016",
            "",
            "2016-1-1",
            "2016-1-01",
            "2016-01-1",
            "2016-1",
            "2016-01-02T1:04Z",
            "../2016",
        ] {
            assert_eq!(
                bad.parse::<PollutionDateTime>(),
                Err(ValidationError::InvalidDateTime(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_decode_pollution() {
        let data: Pollution =
            serde_json::from_str(include_str!("../../tests/fixtures/pollution.json")).unwrap();
        assert_eq!(data.time, "2016-01-02T15:04:05Z");
        assert_eq!(data.location, Coordinates::new(0.0, 10.0));
        assert_eq!(data.data.len(), 2);
        assert_eq!(data.data[0].pressure, 1000.0);
        assert_eq!(data.data[1].value, 1.1e-7);
    }
}
