//! Defines `WeatherCondition`, mapping the API's numeric condition codes to
//! their meaning and day icon.

use std::fmt;

/// The group a condition code belongs to, given by its hundreds digit.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ConditionGroup {
    /// Codes 2xx.
    Thunderstorm,
    /// Codes 3xx.
    Drizzle,
    /// Codes 5xx.
    Rain,
    /// Codes 6xx.
    Snow,
    /// Codes 7xx: mist, smoke, haze, dust, fog, ash, squalls, tornado.
    Atmosphere,
    /// Code 800.
    Clear,
    /// Codes 801-804.
    Clouds,
}

impl fmt::Display for ConditionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConditionGroup::Thunderstorm => "Thunderstorm",
            ConditionGroup::Drizzle => "Drizzle",
            ConditionGroup::Rain => "Rain",
            ConditionGroup::Snow => "Snow",
            ConditionGroup::Atmosphere => "Atmosphere",
            ConditionGroup::Clear => "Clear",
            ConditionGroup::Clouds => "Clouds",
        };
        f.write_str(name)
    }
}

/// One row of the condition table.
///
/// See the [API documentation](https://openweathermap.org/weather-conditions)
/// for the official list.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WeatherCondition {
    pub code: u16,
    pub meaning: &'static str,
    /// Day icon id; the night variant ends in `n` instead of `d`.
    pub icon: &'static str,
}

const CONDITIONS: &[(u16, &str, &str)] = &[
    (200, "thunderstorm with light rain", "11d"),
    (201, "thunderstorm with rain", "11d"),
    (202, "thunderstorm with heavy rain", "11d"),
    (210, "light thunderstorm", "11d"),
    (211, "thunderstorm", "11d"),
    (212, "heavy thunderstorm", "11d"),
    (221, "ragged thunderstorm", "11d"),
    (230, "thunderstorm with light drizzle", "11d"),
    (231, "thunderstorm with drizzle", "11d"),
    (232, "thunderstorm with heavy drizzle", "11d"),
    (300, "light intensity drizzle", "09d"),
    (301, "drizzle", "09d"),
    (302, "heavy intensity drizzle", "09d"),
    (310, "light intensity drizzle rain", "09d"),
    (311, "drizzle rain", "09d"),
    (312, "heavy intensity drizzle rain", "09d"),
    (313, "shower rain and drizzle", "09d"),
    (314, "heavy shower rain and drizzle", "09d"),
    (321, "shower drizzle", "09d"),
    (500, "light rain", "10d"),
    (501, "moderate rain", "10d"),
    (502, "heavy intensity rain", "10d"),
    (503, "very heavy rain", "10d"),
    (504, "extreme rain", "10d"),
    (511, "freezing rain", "13d"),
    (520, "light intensity shower rain", "09d"),
    (521, "shower rain", "09d"),
    (522, "heavy intensity shower rain", "09d"),
    (531, "ragged shower rain", "09d"),
    (600, "light snow", "13d"),
    (601, "snow", "13d"),
    (602, "heavy snow", "13d"),
    (611, "sleet", "13d"),
    (612, "light shower sleet", "13d"),
    (613, "shower sleet", "13d"),
    (615, "light rain and snow", "13d"),
    (616, "rain and snow", "13d"),
    (620, "light shower snow", "13d"),
    (621, "shower snow", "13d"),
    (622, "heavy shower snow", "13d"),
    (701, "mist", "50d"),
    (711, "smoke", "50d"),
    (721, "haze", "50d"),
    (731, "sand/dust whirls", "50d"),
    (741, "fog", "50d"),
    (751, "sand", "50d"),
    (761, "dust", "50d"),
    (762, "volcanic ash", "50d"),
    (771, "squalls", "50d"),
    (781, "tornado", "50d"),
    (800, "clear sky", "01d"),
    (801, "few clouds", "02d"),
    (802, "scattered clouds", "03d"),
    (803, "broken clouds", "04d"),
    (804, "overcast clouds", "04d"),
];

impl WeatherCondition {
    /// Attempts to find the condition for a code reported in a `weather[].id` field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openweathermap::{ConditionGroup, WeatherCondition};
    ///
    /// let fog = WeatherCondition::from_code(741).unwrap();
    /// assert_eq!(fog.meaning, "fog");
    /// assert_eq!(fog.group(), ConditionGroup::Atmosphere);
    ///
    /// assert_eq!(WeatherCondition::from_code(999), None);
    /// ```
    pub fn from_code(code: u16) -> Option<Self> {
        CONDITIONS
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|&(code, meaning, icon)| WeatherCondition {
                code,
                meaning,
                icon,
            })
    }

    /// Iterates the full condition table in code order.
    pub fn all() -> impl Iterator<Item = WeatherCondition> {
        CONDITIONS
            .iter()
            .map(|&(code, meaning, icon)| WeatherCondition {
                code,
                meaning,
                icon,
            })
    }

    pub fn group(&self) -> ConditionGroup {
        match self.code {
            200..=299 => ConditionGroup::Thunderstorm,
            300..=399 => ConditionGroup::Drizzle,
            500..=599 => ConditionGroup::Rain,
            600..=699 => ConditionGroup::Snow,
            700..=799 => ConditionGroup::Atmosphere,
            800 => ConditionGroup::Clear,
            _ => ConditionGroup::Clouds,
        }
    }

    pub fn night_icon(&self) -> String {
        format!("{}n", self.icon.trim_end_matches('d'))
    }
}
