//! Forgiving field readers for loosely typed API payloads.
//!
//! Each reader accepts `null` and falls back to a neutral value. Scalars are
//! coerced where the API is known to be inconsistent: flags arrive as
//! booleans or as strings such as `"None"`/`"Soft"`, counters as integers or
//! floats, ids occasionally as strings.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(value_to_text(Value::deserialize(d)?).unwrap_or_default())
}

/// Like [`text`], but empty strings read as absent.
pub(crate) fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(d)?).filter(|s| !s.is_empty()))
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(value_to_flag(&Value::deserialize(d)?).unwrap_or(false))
}

pub(crate) fn opt_flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(value_to_flag(&Value::deserialize(d)?))
}

pub(crate) fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    Ok(value_to_count(&Value::deserialize(d)?).unwrap_or(0))
}

pub(crate) fn opt_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    Ok(value_to_count(&Value::deserialize(d)?))
}

/// Pixel dimensions; values beyond `u32` saturate.
pub(crate) fn dimension<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let n = value_to_count(&Value::deserialize(d)?).unwrap_or(0);
    Ok(u32::try_from(n).unwrap_or(u32::MAX))
}

pub(crate) fn float<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(value_to_float(&Value::deserialize(d)?).unwrap_or(0.0))
}

pub(crate) fn opt_float<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(value_to_float(&Value::deserialize(d)?))
}

/// String arrays; non-string entries are stringified, `null` entries dropped.
pub(crate) fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.into_iter().filter_map(value_to_text).collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn string_map<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(k, v)| value_to_text(v).map(|v| (k, v)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

pub(crate) fn object<'de, D: Deserializer<'de>>(d: D) -> Result<Map<String, Value>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// A nested object; `null` reads as the empty object.
pub(crate) fn nested<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// An array of nested objects; `null` reads as the empty array and entries
/// that are not objects are dropped.
pub(crate) fn nested_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(d)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    items
        .into_iter()
        .filter(Value::is_object)
        .map(|item| T::deserialize(item).map_err(de::Error::custom))
        .collect()
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_to_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().map(|f| f != 0.0).unwrap_or(false)),
        Value::String(s) => {
            let s = s.trim();
            Some(
                !(s.is_empty()
                    || s.eq_ignore_ascii_case("none")
                    || s.eq_ignore_ascii_case("false")
                    || s == "0"),
            )
        }
        _ => None,
    }
}

fn value_to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
