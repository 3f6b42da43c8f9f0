//! Ways of telling the API which place a request is about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographical coordinate in decimal degrees.
///
/// Serialized the way the API does it, as `{"lon": .., "lat": ..}`. The
/// pollution endpoint spells the keys out, so `longitude`/`latitude` are
/// accepted when decoding.
///
/// # Examples
///
/// ```
/// use openweathermap::Coordinates;
///
/// let montreal = Coordinates::new(45.508, -73.5878);
/// assert_eq!(montreal.latitude, 45.508);
/// assert_eq!(montreal.longitude, -73.5878);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "lon", alias = "longitude")]
    pub longitude: f64,
    #[serde(rename = "lat", alias = "latitude")]
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("lat", self.latitude.to_string()),
            ("lon", self.longitude.to_string()),
        ]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Selects the place an endpoint reports on.
///
/// `From` conversions let most call sites pass the place directly:
///
/// ```
/// use openweathermap::{Coordinates, Location};
///
/// assert_eq!(Location::from("Dublin"), Location::Name("Dublin".into()));
/// assert_eq!(Location::from(2964574u64), Location::Id(2964574));
/// assert_eq!(
///     Location::from(Coordinates::new(53.35, -6.26)),
///     Location::Coordinates(Coordinates::new(53.35, -6.26)),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// City name, optionally followed by state and country codes (`"London,GB"`).
    Name(String),
    Coordinates(Coordinates),
    /// City id from the API's city list.
    Id(u64),
    /// Postal code with an ISO 3166 country code.
    Zip { code: String, country: String },
}

impl Location {
    pub fn zip(code: impl Into<String>, country: impl Into<String>) -> Self {
        Location::Zip {
            code: code.into(),
            country: country.into(),
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Location::Name(name) => vec![("q", name.clone())],
            Location::Coordinates(coordinates) => coordinates.query_pairs(),
            Location::Id(id) => vec![("id", id.to_string())],
            Location::Zip { code, country } => vec![("zip", format!("{code},{country}"))],
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Location::Name(_) => "name",
            Location::Coordinates(_) => "coordinate",
            Location::Id(_) => "id",
            Location::Zip { .. } => "zip",
        }
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Location::Name(name.to_string())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Location::Name(name)
    }
}

impl From<Coordinates> for Location {
    fn from(coordinates: Coordinates) -> Self {
        Location::Coordinates(coordinates)
    }
}

impl From<u64> for Location {
    fn from(id: u64) -> Self {
        Location::Id(id)
    }
}
