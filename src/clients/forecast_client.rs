//! Provides the `ForecastClient` for the 5 day / 3 hour and the 16 day daily forecasts.

use crate::error::OwmError;
use crate::types::forecast::{Forecast16WeatherData, Forecast5WeatherData};
use crate::types::location::Location;
use crate::validation::error::ValidationError;
use crate::validation::language::Language;
use crate::validation::units::Unit;
use crate::OpenWeatherMap;
use bon::bon;
use reqwest::Request;

/// The longest daily forecast the API produces.
pub const MAX_FORECAST_DAYS: u8 = 16;

/// A client builder for forecasts, created by [`OpenWeatherMap::forecast()`].
pub struct ForecastClient<'a> {
    client: &'a OpenWeatherMap,
}

#[bon]
impl<'a> ForecastClient<'a> {
    pub(crate) fn new(client: &'a OpenWeatherMap) -> Self {
        Self { client }
    }

    /// Initiates a request for the 5 day forecast in 3-hour steps.
    ///
    /// `.cnt(n)` limits the number of steps returned; without it the API
    /// returns all 40. `.unit(..)` and `.language(..)` override the client
    /// defaults.
    ///
    /// ```no_run
    /// # use openweathermap::{Location, OpenWeatherMap, OwmError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let forecast = owm
    ///     .forecast()
    ///     .five_day(Location::from("Berlin,DE"))
    ///     .cnt(8)
    ///     .call()
    ///     .await?;
    /// for step in &forecast.list {
    ///     println!("{:?}: {}", step.dt_txt, step.main.temp);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = five_day)]
    #[doc(hidden)]
    pub async fn build_five_day(
        &self,
        #[builder(start_fn)] location: Location,
        cnt: Option<u32>,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Forecast5WeatherData, OwmError> {
        let request = self.five_day_request(&location, cnt, unit, language)?;
        self.client.fetch_json(request).await
    }

    /// Initiates a request for a daily forecast of `.days(n)` days.
    ///
    /// # Errors
    ///
    /// [`ValidationError::ForecastDaysOutOfRange`] unless `1 <= n <= 16`.
    ///
    /// ```no_run
    /// # use openweathermap::{Location, OpenWeatherMap, OwmError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let daily = owm.forecast().daily(Location::Id(2950159)).days(7).call().await?;
    /// if let Some((low, high)) = daily.temperature_range() {
    ///     println!("Between {low} and {high} this week");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = daily)]
    #[doc(hidden)]
    pub async fn build_daily(
        &self,
        #[builder(start_fn)] location: Location,
        days: u8,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Forecast16WeatherData, OwmError> {
        let request = self.daily_request(&location, days, unit, language)?;
        self.client.fetch_json(request).await
    }

    fn five_day_request(
        &self,
        location: &Location,
        cnt: Option<u32>,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Request, OwmError> {
        let mut query = location.query_pairs();
        query.extend(self.client.locale_pairs(unit, language));
        if let Some(cnt) = cnt {
            query.push(("cnt", cnt.to_string()));
        }
        Ok(self.client.api_get("/data/2.5/forecast", &query)?)
    }

    fn daily_request(
        &self,
        location: &Location,
        days: u8,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Result<Request, OwmError> {
        if !(1..=MAX_FORECAST_DAYS).contains(&days) {
            return Err(ValidationError::ForecastDaysOutOfRange {
                days,
                max: MAX_FORECAST_DAYS,
            }
            .into());
        }
        let mut query = location.query_pairs();
        query.extend(self.client.locale_pairs(unit, language));
        query.push(("mode", "json".to_string()));
        query.push(("cnt", days.to_string()));
        Ok(self.client.api_get("/data/2.5/forecast/daily", &query)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openweathermap::tests::{pairs, query_of, test_client, TEST_KEY};

    #[test]
    fn test_five_day_request() {
        let owm = test_client();
        let request = owm
            .forecast()
            .five_day_request(&Location::from("Berlin,DE"), Some(8), None, None)
            .unwrap();
        assert_eq!(request.url().path(), "/data/2.5/forecast");
        assert_eq!(
            query_of(&request),
            pairs(&[
                ("appid", TEST_KEY),
                ("q", "Berlin,DE"),
                ("units", "metric"),
                ("lang", "en"),
                ("cnt", "8")
            ])
        );
    }

    #[test]
    fn test_five_day_request_without_cnt() {
        let owm = test_client();
        let request = owm
            .forecast()
            .five_day_request(&Location::Id(2950159), None, Some(Unit::Kelvin), None)
            .unwrap();
        let query = query_of(&request);
        assert!(query.iter().all(|(k, _)| k != "cnt"));
        assert!(query.contains(&("units".to_string(), "standard".to_string())));
    }

    #[test]
    fn test_daily_request() {
        let owm = test_client();
        let request = owm
            .forecast()
            .daily_request(&Location::from("Lisbon"), 16, None, None)
            .unwrap();
        assert_eq!(request.url().path(), "/data/2.5/forecast/daily");
        assert_eq!(
            query_of(&request),
            pairs(&[
                ("appid", TEST_KEY),
                ("q", "Lisbon"),
                ("units", "metric"),
                ("lang", "en"),
                ("mode", "json"),
                ("cnt", "16")
            ])
        );
    }

    #[test]
    fn test_daily_request_day_bounds() {
        let owm = test_client();
        for days in [0, 17] {
            assert!(matches!(
                owm.forecast().daily_request(&Location::Id(1), days, None, None),
                Err(OwmError::Validation(ValidationError::ForecastDaysOutOfRange {
                    max: 16,
                    ..
                }))
            ));
        }
        assert!(owm
            .forecast()
            .daily_request(&Location::Id(1), 1, None, None)
            .is_ok());
    }
}
