mod api;
mod clients;
mod error;
mod icons;
mod openweathermap;
mod settings;
mod types;
mod utils;
mod validation;

pub use error::OwmError;
pub use openweathermap::OpenWeatherMap;
pub use settings::*;

pub use clients::current_client::*;
pub use clients::forecast_client::*;
pub use clients::history_client::*;
pub use clients::one_call_client::*;
pub use clients::pollution_client::*;
pub use clients::station_client::*;
pub use clients::uv_client::*;

pub use icons::{icon_cache_dir, retrieve_icon, retrieve_icon_with};

pub use types::common::*;
pub use types::current::*;
pub use types::forecast::*;
pub use types::history::*;
pub use types::location::*;
pub use types::one_call::*;
pub use types::pollution::*;
pub use types::station::*;
pub use types::uv::*;
pub use types::weather_condition::{ConditionGroup, WeatherCondition};

pub use validation::api_key::{is_valid_api_key, ApiKey};
pub use validation::language::Language;
pub use validation::units::Unit;

pub use api::error::ApiError;
pub use validation::error::ValidationError;
