//! Measurements a personal weather station can upload.

use crate::validation::error::ValidationError;
use std::collections::BTreeMap;

/// Parameter names the station data endpoint accepts.
pub const STATION_DATA_PARAMETERS: &[&str] = &[
    "wind_dir",
    "wind_speed",
    "wind_gust",
    "temp",
    "humidity",
    "pressure",
    "rain_1h",
    "rain_24h",
    "rain_today",
    "snow",
    "lum",
    "lat",
    "long",
    "alt",
    "radiation",
    "dewpoint",
    "uv",
    "name",
];

pub fn is_valid_station_parameter(parameter: &str) -> bool {
    STATION_DATA_PARAMETERS.contains(&parameter)
}

/// A set of measurements for one upload, keyed by parameter name.
///
/// ```
/// use openweathermap::StationData;
///
/// let mut data = StationData::new();
/// data.insert("temp", "21.5").unwrap();
/// data.insert("name", "Back yard").unwrap();
/// assert!(data.insert("temperature", "21.5").is_err());
/// assert_eq!(data.to_form_string(), "name=Back%20yard&temp=21.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationData {
    values: BTreeMap<String, String>,
}

impl StationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `parameter`, replacing any earlier value.
    pub fn insert(
        &mut self,
        parameter: &str,
        value: impl ToString,
    ) -> Result<&mut Self, ValidationError> {
        if !is_valid_station_parameter(parameter) {
            return Err(ValidationError::InvalidStationParameter(
                parameter.to_string(),
            ));
        }
        self.values.insert(parameter.to_string(), value.to_string());
        Ok(self)
    }

    pub fn get(&self, parameter: &str) -> Option<&str> {
        self.values.get(parameter).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Url-encoded `key=value` pairs joined by `&`, in key order.
    pub fn to_form_string(&self) -> String {
        self.values
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl TryFrom<Vec<(&str, String)>> for StationData {
    type Error = ValidationError;

    fn try_from(pairs: Vec<(&str, String)>) -> Result<Self, Self::Error> {
        let mut data = StationData::new();
        for (parameter, value) in pairs {
            data.insert(parameter, value)?;
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_validation() {
        assert!(is_valid_station_parameter("name"));
        assert!(is_valid_station_parameter("lum"));
        assert!(is_valid_station_parameter("rain_1h"));
        assert!(!is_valid_station_parameter("asdf"));
        assert!(!is_valid_station_parameter("TEMP"));
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut data = StationData::new();
        data.insert("humidity", 40).unwrap();
        data.insert("humidity", 42).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("humidity"), Some("42"));
    }

    #[test]
    fn test_rejected_parameter_leaves_data_untouched() {
        let mut data = StationData::new();
        assert_eq!(
            data.insert("asdf", "1").unwrap_err(),
            ValidationError::InvalidStationParameter("asdf".into())
        );
        assert!(data.is_empty());
    }

    #[test]
    fn test_form_string_is_sorted_and_encoded() {
        let data = StationData::try_from(vec![
            ("wind_speed", "3.4".to_string()),
            ("name", "Jo & Al's".to_string()),
            ("alt", "12".to_string()),
        ])
        .unwrap();
        assert_eq!(
            data.to_form_string(),
            "alt=12&name=Jo%20%26%20Al%27s&wind_speed=3.4"
        );
        assert_eq!(StationData::new().to_form_string(), "");
    }
}
