use crate::error::OwmError;
use crate::types::history::{HistoricalParameters, HistoricalWeatherData};
use crate::types::location::Location;
use crate::validation::error::ValidationError;
use crate::OpenWeatherMap;
use bon::bon;
use reqwest::Request;

/// A client builder for hourly history, created by [`OpenWeatherMap::history()`].
pub struct HistoryClient<'a> {
    client: &'a OpenWeatherMap,
}

#[bon]
impl<'a> HistoryClient<'a> {
    pub(crate) fn new(client: &'a OpenWeatherMap) -> Self {
        Self { client }
    }

    /// Initiates a request for the hourly history of a city.
    ///
    /// Cities may be given by name, id or coordinates; zip codes are not
    /// supported by this endpoint. `.parameters(HistoricalParameters)` limits
    /// the time window or the number of entries.
    ///
    /// ```no_run
    /// # use openweathermap::{HistoricalParameters, Location, OpenWeatherMap, OwmError};
    /// use chrono::{Duration, Utc};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let yesterday = HistoricalParameters {
    ///     start: Some(Utc::now() - Duration::days(1)),
    ///     end: Some(Utc::now()),
    ///     cnt: None,
    /// };
    /// let history = owm
    ///     .history()
    ///     .location(Location::Id(2885679))
    ///     .parameters(yesterday)
    ///     .call()
    ///     .await?;
    /// println!("{} hourly entries", history.list.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] location: Location,
        parameters: Option<HistoricalParameters>,
    ) -> Result<HistoricalWeatherData, OwmError> {
        let request = self.location_request(&location, &parameters.unwrap_or_default())?;
        self.client.fetch_json(request).await
    }

    fn location_request(
        &self,
        location: &Location,
        parameters: &HistoricalParameters,
    ) -> Result<Request, OwmError> {
        if let Location::Zip { .. } = location {
            return Err(ValidationError::UnsupportedLocation {
                endpoint: "history",
                location: location.kind(),
            }
            .into());
        }
        parameters.validate()?;

        let mut query = location.query_pairs();
        query.push(("type", "hour".to_string()));
        query.extend(parameters.query_pairs());
        Ok(self.client.api_get("/data/2.5/history/city", &query)?)
    }
}
