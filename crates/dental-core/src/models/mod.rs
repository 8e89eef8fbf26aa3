//! Domain models for the dental records system.
//!
//! Decoding is lenient so hand-edited documents stay loadable: missing
//! fields take their defaults, and numbers, booleans and `null` stored in a
//! text field read as text (`null` as empty). Only arrays or objects in a text
//! field make a record undecodable.
//!
//! Blank optionals (`email`, `dob`, `reason`, `notes`) are held as `None` and
//! omitted on write. A document that stored them as `""` loses those keys the
//! next time its collection is saved; reading it back gives the same records.

mod appointment;
mod chart;
mod patient;
mod treatment;

pub use appointment::*;
pub use chart::*;
pub use patient::*;
pub use treatment::*;

use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// All records of one kind, keyed by ID.
pub type Collection<T> = BTreeMap<String, T>;

/// Format of every `created_at` stamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of appointment and treatment dates, and of the dashboard's "today".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder shown for optional fields that were left blank.
pub const NOT_AVAILABLE: &str = "N/A";

/// Current local time as a `created_at` stamp.
pub fn local_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Current local date as `YYYY-MM-DD`.
pub fn local_today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// Treat an empty input as absent.
pub fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Render an optional field, falling back to [`NOT_AVAILABLE`].
pub fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Read a scalar JSON value as text. `null` is absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(de::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Deserialize a text field, accepting numbers, booleans and `null`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional text field, mapping `""` and `null` to `None`.
///
/// Documents written by earlier versions store blank optionals as empty strings.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(deserializer)?.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty(" "), Some(" ".to_string()));
        assert_eq!(non_empty("x"), Some("x".to_string()));
    }

    #[test]
    fn test_timestamp_shape() {
        let stamp = local_timestamp();
        assert_eq!(stamp.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "lenient_string")]
        text: String,
        #[serde(default, deserialize_with = "empty_as_none")]
        optional: Option<String>,
    }

    #[test]
    fn test_lenient_scalars() {
        let fields: Fields = serde_json::from_str(r#"{"text": 5552000, "optional": true}"#).unwrap();
        assert_eq!(fields.text, "5552000");
        assert_eq!(fields.optional.as_deref(), Some("true"));

        let fields: Fields = serde_json::from_str(r#"{"text": null, "optional": null}"#).unwrap();
        assert_eq!(fields.text, "");
        assert_eq!(fields.optional, None);

        let fields: Fields = serde_json::from_str(r#"{"text": 12.5, "optional": ""}"#).unwrap();
        assert_eq!(fields.text, "12.5");
        assert_eq!(fields.optional, None);
    }

    #[test]
    fn test_nested_values_rejected() {
        assert!(serde_json::from_str::<Fields>(r#"{"text": ["a"]}"#).is_err());
        assert!(serde_json::from_str::<Fields>(r#"{"optional": {"a": 1}}"#).is_err());
    }

    #[test]
    fn test_or_not_available() {
        assert_eq!(or_not_available(None), "N/A");
        assert_eq!(or_not_available(Some("a@b.c")), "a@b.c");
    }
}
