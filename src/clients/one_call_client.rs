//! Provides the `OneCallClient`, which fetches current conditions, forecasts
//! and alerts for one coordinate in a single request.

use crate::error::OwmError;
use crate::types::location::Coordinates;
use crate::types::one_call::{Exclude, OneCallData};
use crate::validation::language::Language;
use crate::validation::units::Unit;
use crate::OpenWeatherMap;
use bon::bon;
use chrono::{DateTime, Utc};
use reqwest::Request;

/// A client builder for the one call endpoints, created by [`OpenWeatherMap::one_call()`].
pub struct OneCallClient<'a> {
    client: &'a OpenWeatherMap,
}

#[bon]
impl<'a> OneCallClient<'a> {
    pub(crate) fn new(client: &'a OpenWeatherMap) -> Self {
        Self { client }
    }

    /// Initiates a request for current conditions plus minutely, hourly and
    /// daily forecasts and alerts.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.exclude(&[Exclude])`: sections to leave out of the response.
    ///   Repeated entries are sent once.
    /// * `.unit(Unit)` and `.language(Language)`: per request overrides.
    ///
    /// ```no_run
    /// # use openweathermap::{Coordinates, Exclude, OpenWeatherMap, OwmError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let data = owm
    ///     .one_call()
    ///     .current_and_forecast(Coordinates::new(45.508, -73.5878))
    ///     .exclude(&[Exclude::Minutely, Exclude::Hourly])
    ///     .call()
    ///     .await?;
    /// for alert in &data.alerts {
    ///     println!("{}: {}", alert.sender_name, alert.event);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = current_and_forecast)]
    #[doc(hidden)]
    pub async fn build_current_and_forecast(
        &self,
        #[builder(start_fn)] coordinates: Coordinates,
        exclude: Option<&[Exclude]>,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<OneCallData, OwmError> {
        let request =
            self.forecast_request(&coordinates, exclude.unwrap_or_default(), unit, language)?;
        self.client.fetch_json(request).await
    }

    /// Initiates a request for the conditions at a past moment `dt`.
    ///
    /// The response uses the same [`OneCallData`] shape, with `current`
    /// holding the conditions at `dt` and `hourly` the rest of that day.
    #[builder(start_fn = historical)]
    #[doc(hidden)]
    pub async fn build_historical(
        &self,
        #[builder(start_fn)] coordinates: Coordinates,
        #[builder(start_fn)] dt: DateTime<Utc>,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<OneCallData, OwmError> {
        let request = self.historical_request(&coordinates, dt, unit, language)?;
        self.client.fetch_json(request).await
    }

    fn forecast_request(
        &self,
        coordinates: &Coordinates,
        exclude: &[Exclude],
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Request, OwmError> {
        let mut query = coordinates.query_pairs();
        query.extend(self.client.locale_pairs(unit, language));
        if !exclude.is_empty() {
            query.push(("exclude", Exclude::join(exclude)));
        }
        Ok(self.client.api_get("/data/2.5/onecall", &query)?)
    }

    fn historical_request(
        &self,
        coordinates: &Coordinates,
        dt: DateTime<Utc>,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Request, OwmError> {
        let mut query = coordinates.query_pairs();
        query.push(("dt", dt.timestamp().to_string()));
        query.extend(self.client.locale_pairs(unit, language));
        Ok(self
            .client
            .api_get("/data/2.5/onecall/timemachine", &query)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openweathermap::tests::{pairs, query_of, test_client, TEST_KEY};
    use chrono::TimeZone;

    const MONTREAL: Coordinates = Coordinates {
        longitude: -73.5878,
        latitude: 45.508,
    };

    #[test]
    fn test_forecast_request_without_exclude() {
        let owm = test_client();
        let request = owm
            .one_call()
            .forecast_request(&MONTREAL, &[], None, None)
            .unwrap();
        assert_eq!(request.url().path(), "/data/2.5/onecall");
        assert_eq!(
            query_of(&request),
            pairs(&[
                ("appid", TEST_KEY),
                ("lat", "45.508"),
                ("lon", "-73.5878"),
                ("units", "metric"),
                ("lang", "en")
            ])
        );
    }

    #[test]
    fn test_forecast_request_deduplicates_exclude() {
        let owm = test_client();
        let request = owm
            .one_call()
            .forecast_request(
                &MONTREAL,
                &[Exclude::Daily, Exclude::Alerts, Exclude::Daily],
                Some(Unit::Fahrenheit),
                None,
            )
            .unwrap();
        let query = query_of(&request);
        assert_eq!(
            query.last(),
            Some(&("exclude".to_string(), "daily,alerts".to_string()))
        );
        assert!(query.contains(&("units".to_string(), "imperial".to_string())));
    }

    #[test]
    fn test_historical_request() {
        let owm = test_client();
        let dt = Utc.with_ymd_and_hms(2024, 4, 30, 12, 0, 0).unwrap();
        let request = owm
            .one_call()
            .historical_request(&MONTREAL, dt, None, None)
            .unwrap();
        assert_eq!(request.url().path(), "/data/2.5/onecall/timemachine");
        assert_eq!(
            query_of(&request),
            pairs(&[
                ("appid", TEST_KEY),
                ("lat", "45.508"),
                ("lon", "-73.5878"),
                ("dt", "1714478400"),
                ("units", "metric"),
                ("lang", "en")
            ])
        );
    }
}
