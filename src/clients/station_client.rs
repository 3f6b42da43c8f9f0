use crate::api::error::ApiError;
use crate::error::OwmError;
use crate::types::station::StationData;
use crate::validation::error::ValidationError;
use crate::OpenWeatherMap;
use bon::bon;
use reqwest::header::CONTENT_TYPE;
use reqwest::Request;

/// A client builder for station uploads, created by [`OpenWeatherMap::station()`].
///
/// Uploads authenticate with the [`Credentials`](crate::Credentials) the
/// client was built with.
pub struct StationClient<'a> {
    client: &'a OpenWeatherMap,
}

#[bon]
impl<'a> StationClient<'a> {
    pub(crate) fn new(client: &'a OpenWeatherMap) -> Self {
        Self { client }
    }

    /// Initiates an upload of one set of station measurements.
    ///
    /// Returns the raw response body.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingCredentials`] when the client has no
    /// credentials, otherwise the usual request errors.
    ///
    /// ```no_run
    /// # use openweathermap::{OpenWeatherMap, OwmError, StationData};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OwmError> {
    /// let owm = OpenWeatherMap::from_env()?;
    /// let mut data = StationData::new();
    /// data.insert("temp", 18.4)?.insert("humidity", 71)?;
    /// let reply = owm.station().send(data).call().await?;
    /// println!("{reply}");
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = send)]
    #[doc(hidden)]
    pub async fn build_send(
        &self,
        #[builder(start_fn)] data: StationData,
    ) -> Result<String, OwmError> {
        let request = self.send_request(&data)?;
        Ok(self.client.loader().get_text(request).await?)
    }

    fn send_request(&self, data: &StationData) -> Result<Request, OwmError> {
        let credentials = self
            .client
            .credentials()
            .ok_or(ValidationError::MissingCredentials)?;
        let settings = self.client.settings();
        let url = settings.site_url("/data/post");
        settings
            .http_client
            .post(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(data.to_form_string())
            .build()
            .map_err(|e| ApiError::RequestBuild(url, e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openweathermap::tests::{test_client, TEST_KEY};
    use crate::settings::Credentials;
    use reqwest::header::AUTHORIZATION;
    use reqwest::Method;

    #[test]
    fn test_send_request_requires_credentials() {
        let owm = test_client();
        let data = StationData::new();
        assert!(matches!(
            owm.station().send_request(&data),
            Err(OwmError::Validation(ValidationError::MissingCredentials))
        ));
    }

    #[test]
    fn test_send_request_posts_form_with_basic_auth() {
        let owm = OpenWeatherMap::builder()
            .api_key(TEST_KEY)
            .site_base_url("http://site.test/")
            .credentials(Credentials::new("user", "pass"))
            .build()
            .unwrap();
        let mut data = StationData::new();
        data.insert("temp", 18.4).unwrap();
        data.insert("name", "Roof top").unwrap();

        let request = owm.station().send_request(&data).unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://site.test/data/post");
        // base64("user:pass")
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Basic dXNlcjpwYXNz"
        );
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"name=Roof%20top&temp=18.4");
    }
}
