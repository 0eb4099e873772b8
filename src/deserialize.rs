//! Conversion of decoded API JSON into typed entities.
//!
//! Entities derive serde `Deserialize`; [`deserialize`] runs them through
//! `serde_path_to_error` so a failure names exactly which field was malformed
//! (`vessels.0.corporate_entities.1.probability`).
//!
//! Rules:
//! - absent keys and explicit `null` are the same thing for optional fields
//!   and lists (see [`null_as_empty`])
//! - unknown keys are ignored
//! - no coercion: a string where a number is expected is an error

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::error::SdkError;

/// Deserialize one raw record.
pub fn deserialize<T: DeserializeOwned>(raw: &Value) -> Result<T, SdkError> {
    serde_path_to_error::deserialize(raw).map_err(|err| {
        let path = dotted(err.path());
        SdkError::deserialization(&path, err.into_inner().to_string())
    })
}

/// Decode a JSON document and deserialize it.
pub fn deserialize_str<T: DeserializeOwned>(json: &str) -> Result<T, SdkError> {
    let raw: Value = serde_json::from_str(json)?;
    deserialize(&raw)
}

/// Render a serde path with the same dotted keys the flattener produces.
fn dotted(path: &serde_path_to_error::Path) -> String {
    path.iter()
        .map(|segment| match segment {
            Segment::Seq { index } => index.to_string(),
            Segment::Map { key } => key.clone(),
            Segment::Enum { variant } => variant.clone(),
            _ => "?".to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// A list (or any defaultable value) where `null` reads as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An optional confidence score, rejected outside `[0, 1]`.
pub(crate) fn probability<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(p) if !(0.0..=1.0).contains(&p) => Err(D::Error::custom(format!(
            "probability {p} is outside [0, 1]"
        ))),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Layered {
        layer: String,
        #[serde(default, deserialize_with = "null_as_empty")]
        tags: Vec<String>,
        label: Option<String>,
        #[serde(default, deserialize_with = "probability")]
        probability: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[allow(dead_code)]
        product: Vec<Layered>,
    }

    #[test]
    fn test_null_and_absent_are_equivalent() {
        let a: Layered = deserialize(&json!({"layer": "grade", "tags": null, "label": null})).unwrap();
        let b: Layered = deserialize(&json!({"layer": "grade"})).unwrap();
        assert_eq!(a, b);
        assert!(a.tags.is_empty());
        assert_eq!(a.label, None);
    }

    #[test]
    fn test_required_missing_names_path() {
        match deserialize::<Holder>(&json!({"product": [{"layer": "a"}, {"layer": "b"}, {}]})) {
            Err(SdkError::Deserialization { path, message }) => {
                assert_eq!(path, "product.2");
                assert!(message.contains("layer"), "{message}");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_no_string_to_number_coercion() {
        match deserialize::<Layered>(&json!({"layer": "grade", "probability": "0.5"})) {
            Err(SdkError::Deserialization { path, message }) => {
                assert_eq!(path, "probability");
                assert!(message.contains("string"), "{message}");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_integer_rejects_fraction() {
        assert!(deserialize::<i64>(&json!(4401.5)).is_err());
        assert_eq!(deserialize::<i64>(&json!(4401)).unwrap(), 4401);
    }

    #[test]
    fn test_probability_range() {
        let ok: Layered = deserialize(&json!({"layer": "x", "probability": 1})).unwrap();
        assert_eq!(ok.probability, Some(1.0));

        match deserialize::<Layered>(&json!({"layer": "x", "probability": 1.5})) {
            Err(SdkError::Deserialization { path, message }) => {
                assert_eq!(path, "probability");
                assert!(message.contains("outside [0, 1]"), "{message}");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_list_element_path() {
        match deserialize::<Vec<f64>>(&json!([1.0, "x"])) {
            Err(SdkError::Deserialization { path, .. }) => assert_eq!(path, "1"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_position_length() {
        assert_eq!(deserialize::<[f64; 2]>(&json!([4.29, 51.87])).unwrap(), [4.29, 51.87]);
        assert!(deserialize::<[f64; 2]>(&json!([4.29])).is_err());
    }

    #[test]
    fn test_deserialize_str_bad_json() {
        assert!(matches!(deserialize_str::<Layered>("{"), Err(SdkError::Json(_))));
    }
}
