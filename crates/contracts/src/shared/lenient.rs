//! Lenient deserializers for values that come either from the backend
//! (numbers, booleans) or from text inputs (strings, possibly blank).
//!
//! Use with `#[serde(default, deserialize_with = "...")]`.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Number or numeric string; blank string and null become `None`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("`{s}` is not a number"))),
        other => Err(de::Error::custom(format!("expected a number, got {other}"))),
    }
}

/// Non-negative integer or integer string; blank string and null become `None`.
pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("`{n}` is not a whole number"))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("`{s}` is not a whole number"))),
        other => Err(de::Error::custom(format!("expected a number, got {other}"))),
    }
}

/// Like [`opt_f64`] but blank means zero.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_f64(deserializer).map(|n| n.unwrap_or_default())
}

/// Any scalar rendered as text; null becomes an empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!("expected text, got {other}"))),
    }
}

/// Boolean, `"true"`/`"false"` string, or null (false).
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::String(s) => match s.trim() {
            "true" | "1" | "on" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(de::Error::custom(format!("`{other}` is not a flag"))),
        },
        other => Err(de::Error::custom(format!("expected a flag, got {other}"))),
    }
}

/// Reference that the backend may send either as an id string or as a
/// populated object (`{"_id": "...", "name": "..."}`); keeps the id.
pub fn reference_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Object(map) => Ok(map
            .get("_id")
            .or_else(|| map.get("id"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()),
        other => Err(de::Error::custom(format!("expected a reference, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(default, deserialize_with = "opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "opt_u32")]
        quantity: Option<u32>,
        #[serde(default, deserialize_with = "string")]
        sku: String,
        #[serde(default, deserialize_with = "flag")]
        active: bool,
        #[serde(default, deserialize_with = "reference_id")]
        category: String,
    }

    #[test]
    fn blank_text_is_absent_not_zero() {
        let row: Row = serde_json::from_value(json!({ "price": "", "quantity": " " })).unwrap();
        assert_eq!(row.price, None);
        assert_eq!(row.quantity, None);
    }

    #[test]
    fn text_and_numbers_are_both_accepted() {
        let row: Row = serde_json::from_value(json!({
            "price": "12.5",
            "quantity": 3,
            "sku": 1001,
            "active": "true",
            "category": { "_id": "c1", "name": "Fruits" }
        }))
        .unwrap();
        assert_eq!(row.price, Some(12.5));
        assert_eq!(row.quantity, Some(3));
        assert_eq!(row.sku, "1001");
        assert!(row.active);
        assert_eq!(row.category, "c1");
    }

    #[test]
    fn garbage_numbers_are_errors() {
        let err = serde_json::from_value::<Row>(json!({ "price": "12a" })).unwrap_err();
        assert!(err.to_string().contains("`12a` is not a number"));
        assert!(serde_json::from_value::<Row>(json!({ "quantity": -1 })).is_err());
    }
}
