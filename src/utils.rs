use chrono::NaiveDateTime;
use serde_json::Value;

/// Render a UTC timestamp the way the API expects, e.g. `2019-10-01T00:00:00.000Z`.
pub fn to_iso_date(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Owned string list for a request body.
pub fn convert_to_list<S: AsRef<str>>(values: &[S]) -> Value {
    Value::Array(
        values
            .iter()
            .map(|v| Value::String(v.as_ref().to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_to_iso_date() {
        let dt = NaiveDate::from_ymd_opt(2019, 10, 1)
            .unwrap()
            .and_hms_opt(1, 2, 3)
            .unwrap();
        assert_eq!(to_iso_date(dt), "2019-10-01T01:02:03.000Z");
    }

    #[test]
    fn test_convert_to_list() {
        assert_eq!(convert_to_list(&["a"]), json!(["a"]));
        assert_eq!(convert_to_list::<&str>(&[]), json!([]));
        assert_eq!(convert_to_list(&vec!["a".to_string(), "b".to_string()]), json!(["a", "b"]));
    }
}
