//! Measurement systems accepted by the API and their one-letter codes.

use crate::validation::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit system results are returned in.
///
/// Users usually pick a unit by its temperature letter (`C`, `F` or `K`); the
/// API itself expects `metric`, `imperial` or `standard` in the `units` query
/// parameter.
///
/// # Examples
///
/// ```
/// use openweathermap::Unit;
///
/// let unit: Unit = "f".parse().unwrap();
/// assert_eq!(unit, Unit::Fahrenheit);
/// assert_eq!(unit.api_value(), "imperial");
/// assert_eq!(unit.symbol(), 'F');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Celsius, meters per second. API value `metric`.
    #[default]
    Celsius,
    /// Fahrenheit, miles per hour. API value `imperial`.
    Fahrenheit,
    /// Kelvin, meters per second. API value `standard`.
    Kelvin,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    /// Parses the one-letter code (`C`, `F`, `K`), ignoring case.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "C" => Ok(Unit::Celsius),
            "F" => Ok(Unit::Fahrenheit),
            "K" => Ok(Unit::Kelvin),
            _ => Err(ValidationError::UnitUnavailable(code.to_string())),
        }
    }

    /// Parses the value the API uses in its `units` parameter.
    ///
    /// `internal` is still accepted as an older name for Kelvin.
    pub fn from_api_value(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Unit::Celsius),
            "imperial" => Ok(Unit::Fahrenheit),
            "standard" | "internal" => Ok(Unit::Kelvin),
            _ => Err(ValidationError::UnitUnavailable(value.to_string())),
        }
    }

    pub fn api_value(&self) -> &'static str {
        match self {
            Unit::Celsius => "metric",
            Unit::Fahrenheit => "imperial",
            Unit::Kelvin => "standard",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Unit::Celsius => 'C',
            Unit::Fahrenheit => 'F',
            Unit::Kelvin => 'K',
        }
    }

    /// Label for wind speeds returned under this unit system.
    pub fn speed_label(&self) -> &'static str {
        match self {
            Unit::Fahrenheit => "mph",
            Unit::Celsius | Unit::Kelvin => "m/s",
        }
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_code(s).or_else(|_| Unit::from_api_value(s))
    }
}

/// Formats the unit as its API value.
///
/// ```
/// use openweathermap::Unit;
///
/// assert_eq!(Unit::Kelvin.to_string(), "standard");
/// ```
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_value())
    }
}
