//! Response shapes.
//!
//! The backend is not consistent about wrapping: a collection can come
//! back as a bare array, as `{data: [...]}`, as `{products: [...]}` or as
//! `{data: {products: [...]}}`. Single records are bare, `{data: {...}}`
//! or `{product: {...}}`. Everything is unwrapped here and nowhere else.

use contracts::domain::common::Resource;
use serde_json::{Map, Value};

use super::error::ApiError;

fn take_array(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    match map.get(key) {
        Some(Value::Array(_)) => map.remove(key),
        _ => None,
    }
}

fn list_items<R: Resource>(value: Value) -> Result<Value, ApiError> {
    match value {
        items @ Value::Array(_) => Ok(items),
        Value::Object(mut map) => {
            if let Some(items) = take_array(&mut map, "data")
                .or_else(|| take_array(&mut map, R::collection_name()))
            {
                return Ok(items);
            }
            if let Some(Value::Object(mut data)) = map.remove("data") {
                if let Some(items) = take_array(&mut data, R::collection_name()) {
                    return Ok(items);
                }
            }
            Err(ApiError::Decode(format!(
                "expected a list of {}",
                R::collection_name()
            )))
        }
        other => Err(ApiError::Decode(format!(
            "expected a list of {}, got {other}",
            R::collection_name()
        ))),
    }
}

pub fn decode_list<R: Resource>(body: &str) -> Result<Vec<R>, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::from_value(list_items::<R>(value)?)?)
}

pub fn decode_one<R: Resource>(body: &str) -> Result<R, ApiError> {
    let mut value: Value = serde_json::from_str(body)?;
    if let Value::Object(map) = &mut value {
        for key in ["data", R::element_key()] {
            if let Some(Value::Object(_)) = map.get(key) {
                if let Some(inner) = map.remove(key) {
                    return Ok(serde_json::from_value(inner)?);
                }
            }
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// `message`, then `error`, from a JSON error body.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
