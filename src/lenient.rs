//! Forgiving field deserializers for model output.
//!
//! Model replies are valid JSON far more often than they are valid for the
//! schema: `null` where a string belongs, `1.0` for an integer, `"85"` for
//! a number. Each helper here reads the field as a [`Value`] and coerces
//! it, falling back to the field's default, so one odd field never costs
//! the rest of the reply. Use with `#[serde(deserialize_with = "...")]`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// String; numbers and booleans are stringified, anything else is empty.
pub(crate) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Floating-point number, also from numeric strings. Otherwise 0.
pub(crate) fn float<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
    Ok(number(&Value::deserialize(d)?).map_or(0.0, |n| n as f32))
}

/// Integer, rounding floats such as `3.0`. Otherwise 0.
pub(crate) fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(number(&Value::deserialize(d)?).map_or(0, |n| n.round() as i64))
}

/// Optional integer, rounding floats. Unusable values are `None`.
pub(crate) fn optional_integer<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<i64>, D::Error> {
    Ok(number(&Value::deserialize(d)?).map(|n| n.round() as i64))
}

/// Bond order code; anything unusable is a single bond.
pub(crate) fn bond_order<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    Ok(number(&Value::deserialize(d)?)
        .filter(|n| (0.0..=f64::from(u8::MAX)).contains(n))
        .map_or(1, |n| n.round() as u8))
}

/// Boolean, also from `"true"`/`"false"` and 0/1. Otherwise false.
pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

/// List whose unreadable items are dropped. Non-arrays are empty.
pub(crate) fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::debug!("dropping unreadable list item: {e}");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Optional nested object; unreadable values are `None`.
pub(crate) fn optional<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        value => serde_json::from_value(value)
            .map_err(|e| log::debug!("dropping unreadable field: {e}"))
            .ok(),
    })
}

/// Nested object that falls back to its default when unreadable.
pub(crate) fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(d)?).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "super::string")]
        text: String,
        #[serde(deserialize_with = "super::float")]
        value: f32,
        #[serde(deserialize_with = "super::integer")]
        count: i64,
        #[serde(deserialize_with = "super::optional_integer")]
        id: Option<i64>,
        #[serde(deserialize_with = "super::bond_order")]
        order: u8,
        #[serde(deserialize_with = "super::flag")]
        valid: bool,
        #[serde(deserialize_with = "super::list")]
        items: Vec<u32>,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn nulls_become_defaults() {
        let s = sample(
            r#"{"text": null, "value": null, "count": null, "id": null,
                "order": null, "valid": null, "items": null}"#,
        );
        assert_eq!(s.text, "");
        assert_eq!(s.value, 0.0);
        assert_eq!(s.count, 0);
        assert_eq!(s.id, None);
        assert_eq!(s.order, 1);
        assert!(!s.valid);
        assert!(s.items.is_empty());
    }

    #[test]
    fn near_miss_types_are_coerced() {
        let s = sample(
            r#"{"text": 180.5, "value": "85", "count": 3.0, "id": "7",
                "order": 2.0, "valid": "True", "items": [1, "x", 3]}"#,
        );
        assert_eq!(s.text, "180.5");
        assert_eq!(s.value, 85.0);
        assert_eq!(s.count, 3);
        assert_eq!(s.id, Some(7));
        assert_eq!(s.order, 2);
        assert!(s.valid);
        assert_eq!(s.items, [1, 3]);
    }

    #[test]
    fn out_of_range_order_is_single() {
        assert_eq!(sample(r#"{"order": -2}"#).order, 1);
        assert_eq!(sample(r#"{"order": 900}"#).order, 1);
    }
}
