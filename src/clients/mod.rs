pub mod current_client;
pub mod forecast_client;
pub mod history_client;
pub mod one_call_client;
pub mod pollution_client;
pub mod station_client;
pub mod uv_client;
