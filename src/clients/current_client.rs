//! Provides the `CurrentClient` for requesting current weather conditions.
//!
//! This client is obtained via [`OpenWeatherMap::current()`] and lets the user
//! pick the place (or group of places) before executing the request.

use crate::error::OwmError;
use crate::types::current::{CurrentWeatherData, CurrentWeatherGroup};
use crate::types::location::Location;
use crate::validation::error::ValidationError;
use crate::validation::language::Language;
use crate::validation::units::Unit;
use crate::OpenWeatherMap;
use bon::bon;
use reqwest::Request;

/// The most city ids the group endpoint accepts in one request.
pub const MAX_GROUP_IDS: usize = 20;

/// A client builder for fetching current weather.
///
/// Instances are created by calling [`OpenWeatherMap::current()`]. Calling
/// `.location(..).call()` or `.group(..).call()` executes the request.
pub struct CurrentClient<'a> {
    client: &'a OpenWeatherMap,
}

#[bon]
impl<'a> CurrentClient<'a> {
    pub(crate) fn new(client: &'a OpenWeatherMap) -> Self {
        Self { client }
    }

    /// Initiates a request for the current weather at one place.
    ///
    /// The place may be a city name, coordinates, a city id or a zip code,
    /// see [`Location`].
    ///
    /// # Optional Builder Methods
    ///
    /// * `.unit(Unit)`: overrides the client's unit for this request.
    /// * `.language(Language)`: overrides the client's language for this request.
    ///
    /// # Errors
    ///
    /// Returns [`OwmError::Api`] when the request fails, the API answers
    /// with an error status (for example an unknown city), or the body cannot
    /// be decoded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openweathermap::{Location, OpenWeatherMap, OwmError, Unit};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    ///
    /// let weather = owm
    ///     .current()
    ///     .location(Location::from("Phoenix,AZ"))
    ///     .unit(Unit::Fahrenheit)
    ///     .call()
    ///     .await?;
    ///
    /// println!("{}: {}°F", weather.name, weather.main.temp);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] location: Location,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<CurrentWeatherData, OwmError> {
        let request = self.location_request(&location, unit, language)?;
        self.client.fetch_json(request).await
    }

    /// Initiates a request for the current weather in several cities at once.
    ///
    /// Takes between 1 and [`MAX_GROUP_IDS`] city ids and accepts the same
    /// optional `.unit(..)` and `.language(..)` overrides as `.location(..)`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NoCityIds`] or [`ValidationError::TooManyCityIds`]
    /// before any request is made, otherwise the same errors as `.location(..)`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openweathermap::{OpenWeatherMap, OwmError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let group = owm.current().group(&[524901, 703448, 2643743]).call().await?;
    /// for city in &group.list {
    ///     println!("{}: {}", city.name, city.main.temp);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = group)]
    #[doc(hidden)]
    pub async fn build_group(
        &self,
        #[builder(start_fn)] ids: &[u64],
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<CurrentWeatherGroup, OwmError> {
        let request = self.group_request(ids, unit, language)?;
        self.client.fetch_json(request).await
    }

    fn location_request(
        &self,
        location: &Location,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Request, OwmError> {
        let mut query = location.query_pairs();
        query.extend(self.client.locale_pairs(unit, language));
        Ok(self.client.api_get("/data/2.5/weather", &query)?)
    }

    fn group_request(
        &self,
        ids: &[u64],
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Request, OwmError> {
        if ids.is_empty() {
            return Err(ValidationError::NoCityIds.into());
        }
        if ids.len() > MAX_GROUP_IDS {
            return Err(ValidationError::TooManyCityIds {
                count: ids.len(),
                max: MAX_GROUP_IDS,
            }
            .into());
        }
        let joined = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let mut query = vec![("id", joined)];
        query.extend(self.client.locale_pairs(unit, language));
        Ok(self.client.api_get("/data/2.5/group", &query)?)
    }
}
