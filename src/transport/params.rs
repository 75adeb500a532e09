use serde_json::{Map, Value};

/// Remove entries whose value is JSON `null`, keeping everything else
/// unchanged.
///
/// The vendor distinguishes "field omitted" from "field present but empty",
/// so absent optional parameters must disappear from the body entirely while
/// falsy-but-present values (`0`, `""`, `[]`) stay. Pure and idempotent;
/// encoders never insert nulls themselves, this runs on every outgoing body
/// as the last word.
pub fn filter_absent(params: Map<String, Value>) -> Map<String, Value> {
    params
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn drops_exactly_the_null_entries() {
        let input = object(json!({
            "dst": "008613631686024",
            "src": null,
            "record": 0,
            "bizId": "",
            "accreditList": [],
            "requestId": null,
        }));

        let filtered = filter_absent(input);

        assert_eq!(
            filtered,
            object(json!({
                "dst": "008613631686024",
                "record": 0,
                "bizId": "",
                "accreditList": [],
            }))
        );
    }

    #[test]
    fn keeps_falsy_but_present_values() {
        let input = object(json!({"a": 0, "b": "", "c": [], "d": false}));
        let filtered = filter_absent(input.clone());
        assert_eq!(filtered, input);
    }

    #[test]
    fn is_idempotent() {
        let input = object(json!({"a": 1, "b": null, "c": ""}));
        let once = filter_absent(input);
        let twice = filter_absent(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter_absent(Map::new()).is_empty());
    }
}
