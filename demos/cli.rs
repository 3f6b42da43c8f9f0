//! Prints the current weather for a place, or for the caller's location when
//! `--where here` is given.
//!
//! ```text
//! OWM_API_KEY=... cargo run --example cli --features examples -- -w "Las Vegas" -u F -l en
//! ```

use clap::Parser;
use openweathermap::{CurrentWeatherData, Language, Location, OpenWeatherMap, Unit};
use serde::Deserialize;

const GEOLOCATION_URL: &str = "http://ip-api.com/json";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Place to get the weather for, or "here" to geolocate by IP address.
    #[arg(short = 'w', long = "where")]
    location: String,

    /// Unit to display temperatures in: C, F or K.
    #[arg(short, long, default_value = "C")]
    unit: Unit,

    /// Language for the condition descriptions, e.g. EN or DE.
    #[arg(short, long, default_value = "EN")]
    lang: Language,

    #[arg(long, env = "OWM_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[derive(Deserialize)]
struct IpLocation {
    city: String,
}

async fn here() -> Result<String, reqwest::Error> {
    let location: IpLocation = reqwest::get(GEOLOCATION_URL).await?.json().await?;
    Ok(location.city)
}

fn render(weather: &CurrentWeatherData, unit: Unit) -> String {
    let conditions = weather
        .weather
        .iter()
        .map(|w| w.description.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let symbol = unit.symbol();
    format!(
        "Current weather for {}:\n    Conditions: {}\n    Now:        {} {symbol}\n    High:       {} {symbol}\n    Low:        {} {symbol}\n",
        weather.name, conditions, weather.main.temp, weather.main.temp_max, weather.main.temp_min,
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let owm = OpenWeatherMap::builder()
        .api_key(cli.api_key)
        .unit(cli.unit)
        .language(cli.lang)
        .build()?;

    let place = if cli.location.eq_ignore_ascii_case("here") {
        here().await?
    } else {
        cli.location
    };

    let weather = owm.current().location(Location::from(place)).call().await?;
    print!("{}", render(&weather, cli.unit));
    Ok(())
}
