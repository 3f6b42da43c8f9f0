pub mod api_key;
pub mod error;
pub mod language;
pub mod units;
