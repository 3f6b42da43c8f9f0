use crate::validation::error::ValidationError;
use std::fmt;
use std::str::FromStr;

const API_KEY_LEN: usize = 32;

/// A validated OpenWeatherMap API key.
///
/// Keys are exactly 32 ASCII alphanumeric characters. `Debug` only shows the
/// first four characters so keys don't end up in logs.
///
/// ```
/// use openweathermap::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef0123456789abcdef").unwrap();
/// assert_eq!(format!("{key:?}"), "ApiKey(0123****)");
/// assert!(ApiKey::new("asdf1234").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if is_valid_api_key(&key) {
            Ok(ApiKey(key))
        } else {
            Err(ValidationError::InvalidApiKey)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn redacted(&self) -> String {
        format!("{}****", &self.0[..4])
    }
}

/// Checks the key shape without constructing an [`ApiKey`].
pub fn is_valid_api_key(key: &str) -> bool {
    key.len() == API_KEY_LEN && key.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl FromStr for ApiKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiKey::new(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self.redacted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_length_is_enforced() {
        assert!(is_valid_api_key(&"a".repeat(32)));
        assert!(!is_valid_api_key(&"a".repeat(31)));
        assert!(!is_valid_api_key(&"a".repeat(33)));
        assert!(!is_valid_api_key(""));
    }

    #[test]
    fn test_key_charset_is_enforced() {
        let mut key = "b".repeat(31);
        key.push('-');
        assert_eq!(ApiKey::new(key), Err(ValidationError::InvalidApiKey));
        // 32 bytes but not 32 ascii characters
        assert!(!is_valid_api_key(&"é".repeat(16)));
    }

    #[test]
    fn test_as_str_returns_full_key() {
        let raw = "ABCDEF0123456789abcdef0123456789";
        assert_eq!(ApiKey::new(raw).unwrap().as_str(), raw);
    }
}
