//! Language codes accepted by the `lang` query parameter.

use crate::validation::error::ValidationError;
use std::fmt;
use std::str::FromStr;

// Several languages are reachable through more than one code.
const LANG_CODES: &[(&str, &str)] = &[
    ("EN", "English"),
    ("RU", "Russian"),
    ("IT", "Italian"),
    ("ES", "Spanish"),
    ("SP", "Spanish"),
    ("UK", "Ukrainian"),
    ("UA", "Ukrainian"),
    ("DE", "German"),
    ("PT", "Portuguese"),
    ("RO", "Romanian"),
    ("PL", "Polish"),
    ("FI", "Finnish"),
    ("NL", "Dutch"),
    ("FR", "French"),
    ("BG", "Bulgarian"),
    ("SV", "Swedish"),
    ("SE", "Swedish"),
    ("TR", "Turkish"),
    ("HR", "Croatian"),
    ("CA", "Catalan"),
    ("ZH_TW", "Chinese Traditional"),
    ("ZH", "Chinese Simplified"),
    ("ZH_CN", "Chinese Simplified"),
];

/// A language from the fixed table of codes the API translates descriptions into.
///
/// # Examples
///
/// ```
/// use openweathermap::Language;
///
/// let lang: Language = "zh_cn".parse().unwrap();
/// assert_eq!(lang.code(), "ZH_CN");
/// assert_eq!(lang.name(), "Chinese Simplified");
/// assert_eq!(lang.api_value(), "zh_cn");
///
/// assert!("xx".parse::<Language>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    pub const EN: Language = Language {
        code: "EN",
        name: "English",
    };

    /// Looks up a code in the language table, ignoring case.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        let wanted = code.trim().to_ascii_uppercase();
        LANG_CODES
            .iter()
            .find(|(c, _)| *c == wanted)
            .map(|&(code, name)| Language { code, name })
            .ok_or_else(|| ValidationError::LanguageUnavailable(code.to_string()))
    }

    /// Iterates over every supported code, including aliases.
    pub fn all() -> impl Iterator<Item = Language> {
        LANG_CODES
            .iter()
            .map(|&(code, name)| Language { code, name })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The code as sent to the API (lower case).
    pub fn api_value(&self) -> String {
        self.code.to_ascii_lowercase()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::EN
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_validates() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Ok(lang));
            assert_eq!(Language::from_code(&lang.api_value()), Ok(lang));
        }
        assert_eq!(Language::all().count(), 23);
    }

    #[test]
    fn test_aliases_share_a_name() {
        let sp = Language::from_code("SP").unwrap();
        let es = Language::from_code("es").unwrap();
        assert_eq!(sp.name(), es.name());
        assert_ne!(sp, es);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert_eq!(
            Language::from_code("klingon"),
            Err(ValidationError::LanguageUnavailable("klingon".into()))
        );
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default().code(), "EN");
        assert_eq!(Language::default().to_string(), "EN");
    }
}
