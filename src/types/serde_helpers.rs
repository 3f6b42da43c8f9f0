//! Field codecs for the few places where the API's JSON doesn't map directly.

/// `cod` is sent as `200` on some endpoints and `"200"` on others.
pub mod cod {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        })
    }
}

/// The `dt_txt` field of forecast entries, e.g. `"2024-05-01 15:00:00"` in UTC.
pub mod dt_txt {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        NaiveDateTime::parse_from_str(raw.trim(), FORMAT)
            .map(Some)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super::cod", default)]
        cod: String,
        #[serde(with = "super::dt_txt", default)]
        dt_txt: Option<NaiveDateTime>,
    }

    #[test]
    fn test_cod_accepts_numbers_and_strings() {
        let a: Sample = serde_json::from_str(r#"{"cod":200}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"cod":"404"}"#).unwrap();
        assert_eq!(a.cod, "200");
        assert_eq!(b.cod, "404");
    }

    #[test]
    fn test_dt_txt_parses_forecast_timestamps() {
        let s: Sample = serde_json::from_str(r#"{"dt_txt":"2024-05-01 15:00:00"}"#).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        assert_eq!(s.dt_txt, Some(expected));
        assert_eq!(
            serde_json::to_value(&s).unwrap()["dt_txt"],
            "2024-05-01 15:00:00"
        );
    }

    #[test]
    fn test_dt_txt_rejects_other_formats() {
        assert!(serde_json::from_str::<Sample>(r#"{"dt_txt":"2024-05-01T15:00:00Z"}"#).is_err());
    }
}
