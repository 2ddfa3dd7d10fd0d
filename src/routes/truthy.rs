//! Decoding of optional text fields with JSON falsiness.
//!
//! `null`, `false`, `0` and `""` count as absent. Other strings pass through
//! unchanged; `true` and non-zero numbers are kept as their text form.
//! Arrays and objects are rejected.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

pub fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(D::Error::custom("expected a string, number, boolean or null"))
        }
    }
}
