use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unit '{0}' is unavailable, expected one of C, F or K")]
    UnitUnavailable(String),

    #[error("Language '{0}' is unavailable")]
    LanguageUnavailable(String),

    #[error("Invalid API key: expected 32 alphanumeric characters")]
    InvalidApiKey,

    #[error("No city ids were given")]
    NoCityIds,

    #[error("Too many city ids: {count} given, at most {max} are allowed")]
    TooManyCityIds { count: usize, max: usize },

    #[error("Forecast days must be between 1 and {max}, got {days}")]
    ForecastDaysOutOfRange { days: u8, max: u8 },

    #[error("The {endpoint} endpoint does not support {location} locations")]
    UnsupportedLocation {
        endpoint: &'static str,
        location: &'static str,
    },

    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidTimeRange { start: i64, end: i64 },

    #[error("'{0}' is neither an ISO 8601 timestamp nor a supported alias")]
    InvalidDateTime(String),

    #[error("'{0}' is not a recognised station data parameter")]
    InvalidStationParameter(String),

    #[error("Icon file '{0}' must be a plain file name")]
    InvalidIconFile(String),

    #[error("Station uploads require a username and password")]
    MissingCredentials,
}
