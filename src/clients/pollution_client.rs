use crate::error::OwmError;
use crate::types::location::Coordinates;
use crate::types::pollution::{Pollution, PollutionDateTime};
use crate::OpenWeatherMap;
use bon::bon;
use reqwest::Request;

/// A client builder for carbon monoxide data, created by [`OpenWeatherMap::pollution()`].
pub struct PollutionClient<'a> {
    client: &'a OpenWeatherMap,
}

#[bon]
impl<'a> PollutionClient<'a> {
    pub(crate) fn new(client: &'a OpenWeatherMap) -> Self {
        Self { client }
    }

    /// Initiates a request for the carbon monoxide measurements at a coordinate.
    ///
    /// `.datetime(PollutionDateTime)` selects the moment; without it the
    /// latest measurement (`current`) is returned.
    ///
    /// ```no_run
    /// # use openweathermap::{Coordinates, OpenWeatherMap, OwmError, PollutionDateTime};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let january: PollutionDateTime = "2016-01".parse()?;
    /// let pollution = owm
    ///     .pollution()
    ///     .location(Coordinates::new(0.0, 10.0))
    ///     .datetime(january)
    ///     .call()
    ///     .await?;
    /// println!("{} levels measured", pollution.data.len());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinates: Coordinates,
        datetime: Option<PollutionDateTime>,
    ) -> Result<Pollution, OwmError> {
        let request = self.location_request(&coordinates, &datetime.unwrap_or_default())?;
        self.client.fetch_json(request).await
    }

    fn location_request(
        &self,
        coordinates: &Coordinates,
        datetime: &PollutionDateTime,
    ) -> Result<Request, OwmError> {
        let path = format!("/pollution/v1/co/{coordinates}/{datetime}.json");
        Ok(self.client.api_get(&path, &[])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openweathermap::tests::{pairs, query_of, test_client, TEST_KEY};

    #[test]
    fn test_current_pollution_request() {
        let owm = test_client();
        let request = owm
            .pollution()
            .location_request(&Coordinates::new(0.0, 10.0), &PollutionDateTime::CURRENT)
            .unwrap();
        assert_eq!(request.url().path(), "/pollution/v1/co/0,10/current.json");
        assert_eq!(query_of(&request), pairs(&[("appid", TEST_KEY)]));
    }

    #[test]
    fn test_timestamp_pollution_request() {
        let owm = test_client();
        let datetime: PollutionDateTime = "2016-01-02T15:04:05Z".parse().unwrap();
        let request = owm
            .pollution()
            .location_request(&Coordinates::new(51.5073, -0.1277), &datetime)
            .unwrap();
        assert_eq!(
            request.url().path(),
            "/pollution/v1/co/51.5073,-0.1277/2016-01-02T15:04:05Z.json"
        );
    }
}
