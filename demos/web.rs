//! Serves the current weather for the server's own location at
//! `http://localhost:8888/here`.
//!
//! Icons are downloaded into `static/img` on first use and served from `/static`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use log::{error, info};
use openweathermap::{retrieve_icon_with, CurrentWeatherData, Location, OpenWeatherMap, Unit};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

const GEOLOCATION_URL: &str = "http://ip-api.com/json";
const ICON_DIR: &str = "static/img";

#[derive(Deserialize)]
struct IpLocation {
    city: String,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render(weather: &CurrentWeatherData, unit: Unit) -> String {
    let (description, icon) = weather
        .primary_weather()
        .map(|w| (w.description.as_str(), w.icon_file()))
        .unwrap_or_default();
    let symbol = unit.symbol();
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Weather for {name}</title></head>
<body>
  <h1>{name}</h1>
  <img src="/static/img/{icon}" alt="{description}">
  <p>{description}</p>
  <p>Now: {temp} &deg;{symbol}</p>
  <p>High: {high} &deg;{symbol} / Low: {low} &deg;{symbol}</p>
  <p>Wind: {wind} {speed}</p>
</body>
</html>"#,
        name = escape(&weather.name),
        icon = escape(&icon),
        description = escape(description),
        temp = weather.main.temp,
        high = weather.main.temp_max,
        low = weather.main.temp_min,
        wind = weather.wind.speed,
        speed = unit.speed_label(),
    )
}

async fn here(State(owm): State<Arc<OpenWeatherMap>>) -> Result<Html<String>, StatusCode> {
    let location = async {
        reqwest::get(GEOLOCATION_URL)
            .await?
            .json::<IpLocation>()
            .await
    }
    .await
    .map_err(|e| {
        error!("Geolocation failed: {e}");
        StatusCode::BAD_GATEWAY
    })?;

    let weather = owm
        .current()
        .location(Location::from(location.city))
        .call()
        .await
        .map_err(|e| {
            error!("Weather request failed: {e}");
            StatusCode::BAD_GATEWAY
        })?;

    if let Some(w) = weather.primary_weather() {
        let icon = w.icon_file();
        if !Path::new(ICON_DIR).join(&icon).exists() {
            if let Err(e) = retrieve_icon_with(owm.settings(), ICON_DIR, &icon).await {
                error!("Could not fetch icon {icon}: {e}");
            }
        }
    }

    Ok(Html(render(&weather, owm.unit())))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let owm = OpenWeatherMap::builder()
        .api_key(std::env::var("OWM_API_KEY")?)
        .unit(Unit::Fahrenheit)
        .build()?;

    let app = Router::new()
        .route("/here", get(here))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(Arc::new(owm));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8888").await?;
    info!("Listening on http://localhost:8888/here");
    axum::serve(listener, app).await?;
    Ok(())
}
