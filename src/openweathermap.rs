//! The main entry point: a configured client from which every endpoint
//! family is reached.

use crate::api::error::ApiError;
use crate::api::loader::ApiLoader;
use crate::clients::current_client::CurrentClient;
use crate::clients::forecast_client::ForecastClient;
use crate::clients::history_client::HistoryClient;
use crate::clients::one_call_client::OneCallClient;
use crate::clients::pollution_client::PollutionClient;
use crate::clients::station_client::StationClient;
use crate::clients::uv_client::UvClient;
use crate::error::OwmError;
use crate::settings::{Credentials, Settings, ENV_API_KEY, ENV_PASSWORD, ENV_USERNAME};
use crate::validation::api_key::ApiKey;
use crate::validation::language::Language;
use crate::validation::units::Unit;
use bon::bon;
use reqwest::{Client, Method, Request};
use serde::de::DeserializeOwned;

/// Client for the OpenWeatherMap API.
///
/// Holds the API key, the default unit and language, and the HTTP settings.
/// Endpoint families are reached through sub-clients such as
/// [`OpenWeatherMap::current()`] or [`OpenWeatherMap::forecast()`]; each call
/// performs exactly one HTTP request.
///
/// # Examples
///
/// ```rust
/// use openweathermap::{Language, OpenWeatherMap, OwmError, Unit};
///
/// # fn main() -> Result<(), OwmError> {
/// let owm = OpenWeatherMap::builder()
///     .api_key("0123456789abcdef0123456789abcdef")
///     .unit(Unit::Fahrenheit)
///     .language(Language::from_code("de")?)
///     .build()?;
/// assert_eq!(owm.unit(), Unit::Fahrenheit);
/// assert_eq!(owm.language().code(), "DE");
///
/// assert!(OpenWeatherMap::builder().api_key("too-short").build().is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OpenWeatherMap {
    api_key: ApiKey,
    unit: Unit,
    language: Language,
    settings: Settings,
    credentials: Option<Credentials>,
    loader: ApiLoader,
}

#[bon]
impl OpenWeatherMap {
    /// Creates a client, validating the API key.
    ///
    /// Start with [`OpenWeatherMap::builder()`], set `.api_key(..)` and finish
    /// with `.build()`. Everything else is optional:
    ///
    /// * `.unit(Unit)`: defaults to [`Unit::Celsius`].
    /// * `.language(Language)`: defaults to [`Language::EN`].
    /// * `.http_client(reqwest::Client)`: share a client with the rest of your application.
    /// * `.api_base_url(..)` / `.site_base_url(..)`: point at a proxy or test server.
    /// * `.credentials(Credentials)`: needed for station uploads only.
    ///
    /// # Errors
    ///
    /// [`OwmError::Validation`] when the key is not 32 alphanumeric characters.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        unit: Option<Unit>,
        language: Option<Language>,
        http_client: Option<Client>,
        #[builder(into)] api_base_url: Option<String>,
        #[builder(into)] site_base_url: Option<String>,
        credentials: Option<Credentials>,
    ) -> Result<Self, OwmError> {
        let api_key = ApiKey::new(api_key)?;
        let defaults = Settings::default();
        let settings = Settings {
            http_client: http_client.unwrap_or(defaults.http_client),
            api_base_url: api_base_url.unwrap_or(defaults.api_base_url),
            site_base_url: site_base_url.unwrap_or(defaults.site_base_url),
        };
        Ok(Self {
            api_key,
            unit: unit.unwrap_or_default(),
            language: language.unwrap_or_default(),
            loader: ApiLoader::new(settings.http_client.clone()),
            settings,
            credentials,
        })
    }

    /// Creates a client from the `OWM_API_KEY` environment variable.
    ///
    /// When both `OWM_USERNAME` and `OWM_PASSWORD` are set they are used as
    /// station upload credentials.
    ///
    /// # Errors
    ///
    /// [`OwmError::MissingEnvVar`] when `OWM_API_KEY` is unset, or a validation
    /// error when its value is not a valid key.
    pub fn from_env() -> Result<Self, OwmError> {
        let api_key =
            std::env::var(ENV_API_KEY).map_err(|_| OwmError::MissingEnvVar(ENV_API_KEY))?;
        let credentials = match (std::env::var(ENV_USERNAME), std::env::var(ENV_PASSWORD)) {
            (Ok(username), Ok(password)) => Some(Credentials::new(username, password)),
            _ => None,
        };
        Self::builder()
            .api_key(api_key)
            .maybe_credentials(credentials)
            .build()
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Current weather for one place or a group of city ids.
    pub fn current(&self) -> CurrentClient {
        CurrentClient::new(self)
    }

    /// 5 day / 3 hour and 16 day daily forecasts.
    pub fn forecast(&self) -> ForecastClient {
        ForecastClient::new(self)
    }

    /// Hourly historical observations for a city.
    pub fn history(&self) -> HistoryClient {
        HistoryClient::new(self)
    }

    /// Combined current, forecast and alert data for a coordinate.
    pub fn one_call(&self) -> OneCallClient {
        OneCallClient::new(self)
    }

    /// Carbon monoxide measurements.
    pub fn pollution(&self) -> PollutionClient {
        PollutionClient::new(self)
    }

    /// UV index readings.
    pub fn uv(&self) -> UvClient {
        UvClient::new(self)
    }

    /// Uploading measurements from a personal weather station.
    pub fn station(&self) -> StationClient {
        StationClient::new(self)
    }

    pub(crate) fn loader(&self) -> &ApiLoader {
        &self.loader
    }

    /// `units` and `lang` pairs, falling back to the client defaults.
    pub(crate) fn locale_pairs(
        &self,
        unit: Option<Unit>,
        language: Option<Language>,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("units", unit.unwrap_or(self.unit).api_value().to_string()),
            ("lang", language.unwrap_or(self.language).api_value()),
        ]
    }

    /// Builds a GET request on the API host with `appid` followed by `query`.
    pub(crate) fn api_get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<Request, ApiError> {
        let url = self.settings.api_url(path);
        self.settings
            .http_client
            .request(Method::GET, &url)
            .query(&[("appid", self.api_key.as_str())])
            .query(query)
            .build()
            .map_err(|e| ApiError::RequestBuild(url, e))
    }

    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<T, OwmError> {
        Ok(self.loader.get_json(request).await?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::validation::error::ValidationError;

    pub(crate) const TEST_KEY: &str = "0123456789abcdef0123456789abcdef";

    pub(crate) fn test_client() -> OpenWeatherMap {
        OpenWeatherMap::builder()
            .api_key(TEST_KEY)
            .api_base_url("http://owm.test")
            .site_base_url("http://site.test/")
            .build()
            .unwrap()
    }

    /// Query pairs of a built request, in order.
    pub(crate) fn query_of(request: &Request) -> Vec<(String, String)> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub(crate) fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_builder_defaults() {
        let owm = OpenWeatherMap::builder().api_key(TEST_KEY).build().unwrap();
        assert_eq!(owm.unit(), Unit::Celsius);
        assert_eq!(owm.language(), Language::EN);
        assert_eq!(owm.api_key().as_str(), TEST_KEY);
        assert_eq!(owm.settings().api_base_url, "https://api.openweathermap.org");
        assert_eq!(owm.settings().site_base_url, "https://openweathermap.org");
        assert!(owm.credentials().is_none());
    }

    #[test]
    fn test_builder_rejects_bad_key() {
        let err = OpenWeatherMap::builder().api_key("abc").build().unwrap_err();
        assert!(matches!(
            err,
            OwmError::Validation(ValidationError::InvalidApiKey)
        ));
    }

    #[test]
    fn test_api_get_puts_key_first() {
        let owm = test_client();
        let request = owm
            .api_get("/data/2.5/weather", &[("q", "Paris".to_string())])
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/data/2.5/weather");
        assert_eq!(
            query_of(&request),
            pairs(&[("appid", TEST_KEY), ("q", "Paris")])
        );
    }

    #[test]
    fn test_locale_pairs_overrides() {
        let owm = test_client();
        assert_eq!(
            owm.locale_pairs(None, None),
            vec![("units", "metric".to_string()), ("lang", "en".to_string())]
        );
        let fr = Language::from_code("FR").unwrap();
        assert_eq!(
            owm.locale_pairs(Some(Unit::Kelvin), Some(fr)),
            vec![("units", "standard".to_string()), ("lang", "fr".to_string())]
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let owm = test_client();
        assert!(!format!("{owm:?}").contains(TEST_KEY));
    }
}
