//! Connection settings shared by every endpoint client.

use reqwest::Client;

pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_SITE_BASE_URL: &str = "https://openweathermap.org";

pub const ENV_API_KEY: &str = "OWM_API_KEY";
pub const ENV_USERNAME: &str = "OWM_USERNAME";
pub const ENV_PASSWORD: &str = "OWM_PASSWORD";

/// HTTP client and base URLs used to reach the API.
///
/// The base URLs can be pointed at a proxy or a local test server. The API
/// base serves every data endpoint, the site base serves weather icons and
/// station uploads.
#[derive(Debug, Clone)]
pub struct Settings {
    pub http_client: Client,
    pub api_base_url: String,
    pub site_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_client: Client::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    pub(crate) fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }

    pub(crate) fn site_url(&self, path: &str) -> String {
        join_url(&self.site_base_url, path)
    }
}

/// Username and password for uploading station measurements.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
