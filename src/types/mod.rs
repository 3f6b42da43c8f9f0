pub mod common;
pub mod current;
pub mod forecast;
pub mod history;
pub mod location;
pub mod one_call;
pub mod pollution;
pub mod serde_helpers;
pub mod station;
pub mod uv;
pub mod weather_condition;
