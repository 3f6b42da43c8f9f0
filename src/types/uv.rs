//! UV index readings and the WHO exposure categories used to interpret them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UV index reading for one point at one moment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Uv {
    pub lat: f64,
    pub lon: f64,
    pub date_iso: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl Uv {
    /// The exposure category for this reading.
    ///
    /// ```
    /// use openweathermap::Uv;
    ///
    /// let reading = Uv { value: 6.2, ..Default::default() };
    /// assert_eq!(reading.info().unwrap().risk, "High");
    ///
    /// let broken = Uv { value: -1.0, ..Default::default() };
    /// assert!(broken.info().is_none());
    /// ```
    pub fn info(&self) -> Option<&'static UvIndexInfo> {
        UvIndexInfo::for_value(self.value)
    }
}

/// One exposure category of the UV index scale.
#[derive(Debug, Clone, PartialEq)]
pub struct UvIndexInfo {
    /// Lower bound (inclusive) and upper bound (exclusive). The last band is open ended.
    pub range: (f64, Option<f64>),
    /// Color used on media graphics.
    pub color: &'static str,
    /// Risk of harm from unprotected sun exposure for the average adult.
    pub risk: &'static str,
    pub recommended_protection: &'static str,
}

pub static UV_INDEX_SCALE: [UvIndexInfo; 5] = [
    UvIndexInfo {
        range: (0.0, Some(3.0)),
        color: "Green",
        risk: "Low",
        recommended_protection: "Wear sunglasses on bright days; use sunscreen if there is snow on \
            the ground, which reflects UV radiation, or if you have particularly fair skin.",
    },
    UvIndexInfo {
        range: (3.0, Some(6.0)),
        color: "Yellow",
        risk: "Moderate",
        recommended_protection: "Take precautions, such as covering up, if you will be outside. \
            Stay in shade near midday when the sun is strongest.",
    },
    UvIndexInfo {
        range: (6.0, Some(8.0)),
        color: "Orange",
        risk: "High",
        recommended_protection: "Cover the body with sun protective clothing, use SPF 30+ \
            sunscreen, wear a hat, reduce time in the sun within three hours of solar noon, and \
            wear sunglasses.",
    },
    UvIndexInfo {
        range: (8.0, Some(11.0)),
        color: "Red",
        risk: "Very high",
        recommended_protection: "Wear SPF 30+ sunscreen, a shirt, sunglasses, and a wide-brimmed \
            hat. Do not stay in the sun for too long.",
    },
    UvIndexInfo {
        range: (11.0, None),
        color: "Violet",
        risk: "Extreme",
        recommended_protection: "Take all precautions: Wear SPF 30+ sunscreen, a long-sleeved \
            shirt and trousers, sunglasses, and a very broad hat. Avoid the sun within three \
            hours of solar noon.",
    },
];

impl UvIndexInfo {
    /// Finds the band containing `value`. Negative and non-finite values have none.
    pub fn for_value(value: f64) -> Option<&'static UvIndexInfo> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        UV_INDEX_SCALE.iter().find(|band| {
            let (low, high) = band.range;
            value >= low && high.map_or(true, |high| value < high)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_current_uv() {
        let uv: Uv = serde_json::from_str(include_str!("../../tests/fixtures/uv.json")).unwrap();
        assert_eq!(uv.lat, 37.75);
        assert_eq!(uv.lon, -122.37);
        assert_eq!(uv.date.timestamp(), 1714564800);
        assert_eq!(uv.value, 7.48);
        assert_eq!(uv.info().map(|i| i.color), Some("Orange"));
    }

    #[test]
    fn test_decode_uv_history() {
        let history: Vec<Uv> =
            serde_json::from_str(include_str!("../../tests/fixtures/uv_history.json")).unwrap();
        let risks: Vec<_> = history
            .iter()
            .map(|uv| uv.info().map(|i| i.risk))
            .collect();
        assert_eq!(risks, [Some("Low"), Some("Extreme")]);
    }

    #[test]
    fn test_band_edges() {
        let risk = |v| UvIndexInfo::for_value(v).map(|i| i.risk);
        assert_eq!(risk(0.0), Some("Low"));
        assert_eq!(risk(2.95), Some("Low"));
        assert_eq!(risk(3.0), Some("Moderate"));
        assert_eq!(risk(5.99), Some("Moderate"));
        assert_eq!(risk(6.0), Some("High"));
        assert_eq!(risk(8.0), Some("Very high"));
        assert_eq!(risk(10.99), Some("Very high"));
        assert_eq!(risk(11.0), Some("Extreme"));
        assert_eq!(risk(25.0), Some("Extreme"));
        assert_eq!(risk(-0.1), None);
        assert_eq!(risk(f64::NAN), None);
        assert_eq!(risk(f64::INFINITY), None);
    }
}
