use crate::error::OwmError;
use crate::types::location::Coordinates;
use crate::types::uv::Uv;
use crate::validation::error::ValidationError;
use crate::OpenWeatherMap;
use bon::bon;
use chrono::{DateTime, Utc};
use reqwest::Request;

/// A client builder for UV index readings, created by [`OpenWeatherMap::uv()`].
pub struct UvClient<'a> {
    client: &'a OpenWeatherMap,
}

#[bon]
impl<'a> UvClient<'a> {
    pub(crate) fn new(client: &'a OpenWeatherMap) -> Self {
        Self { client }
    }

    /// Initiates a request for the current UV index at a coordinate.
    ///
    /// ```no_run
    /// # use openweathermap::{Coordinates, OpenWeatherMap, OwmError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let uv = owm.uv().current(Coordinates::new(37.75, -122.37)).call().await?;
    /// if let Some(info) = uv.info() {
    ///     println!("UV {} ({}): {}", uv.value, info.risk, info.recommended_protection);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = current)]
    #[doc(hidden)]
    pub async fn build_current(
        &self,
        #[builder(start_fn)] coordinates: Coordinates,
    ) -> Result<Uv, OwmError> {
        let request = self.current_request(&coordinates)?;
        self.client.fetch_json(request).await
    }

    /// Initiates a request for the daily UV readings between `start` and `end`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidTimeRange`] when `start` is after `end`.
    #[builder(start_fn = historical)]
    #[doc(hidden)]
    pub async fn build_historical(
        &self,
        #[builder(start_fn)] coordinates: Coordinates,
        #[builder(start_fn)] start: DateTime<Utc>,
        #[builder(start_fn)] end: DateTime<Utc>,
    ) -> Result<Vec<Uv>, OwmError> {
        let request = self.historical_request(&coordinates, start, end)?;
        self.client.fetch_json(request).await
    }

    fn current_request(&self, coordinates: &Coordinates) -> Result<Request, OwmError> {
        Ok(self
            .client
            .api_get("/data/2.5/uvi", &coordinates.query_pairs())?)
    }

    fn historical_request(
        &self,
        coordinates: &Coordinates,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Request, OwmError> {
        if start > end {
            return Err(ValidationError::InvalidTimeRange {
                start: start.timestamp(),
                end: end.timestamp(),
            }
            .into());
        }
        let mut query = coordinates.query_pairs();
        query.push(("start", start.timestamp().to_string()));
        query.push(("end", end.timestamp().to_string()));
        Ok(self.client.api_get("/data/2.5/uvi/history", &query)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openweathermap::tests::{pairs, query_of, test_client, TEST_KEY};
    use chrono::TimeZone;

    #[test]
    fn test_current_uv_request() {
        let owm = test_client();
        let request = owm
            .uv()
            .current_request(&Coordinates::new(37.75, -122.37))
            .unwrap();
        assert_eq!(request.url().path(), "/data/2.5/uvi");
        assert_eq!(
            query_of(&request),
            pairs(&[("appid", TEST_KEY), ("lat", "37.75"), ("lon", "-122.37")])
        );
    }

    #[test]
    fn test_historical_uv_request() {
        let owm = test_client();
        let start = Utc.timestamp_opt(1_714_392_000, 0).unwrap();
        let end = Utc.timestamp_opt(1_714_478_400, 0).unwrap();
        let request = owm
            .uv()
            .historical_request(&Coordinates::new(37.75, -122.37), start, end)
            .unwrap();
        assert_eq!(request.url().path(), "/data/2.5/uvi/history");
        assert_eq!(
            query_of(&request),
            pairs(&[
                ("appid", TEST_KEY),
                ("lat", "37.75"),
                ("lon", "-122.37"),
                ("start", "1714392000"),
                ("end", "1714478400")
            ])
        );
        assert!(matches!(
            owm.uv()
                .historical_request(&Coordinates::new(37.75, -122.37), end, start),
            Err(OwmError::Validation(ValidationError::InvalidTimeRange { .. }))
        ));
    }
}
