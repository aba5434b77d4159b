//! Field selection helpers shared by the extractors

use serde::Serialize;
use serde_json::{Map, Value};

/// First element of a multi-valued resource or multi-instance object.
///
/// Whenever a source carries more than one value the policy is to take the
/// first and ignore the rest, never to aggregate. An empty list selects
/// nothing; that alone is not a failure.
pub(crate) fn first_element<T>(list: &[T]) -> Option<&T> {
    list.first()
}

/// Convert a seconds-based timestamp to milliseconds, propagating absence.
pub(crate) fn to_millis(seconds: Option<i64>) -> Option<i64> {
    seconds.map(|s| s.saturating_mul(1000))
}

/// Builder for candidate objects handed to the schema validator.
///
/// A field is inserted only when its value is present, so candidates never
/// carry null placeholders. A field that cannot be derived is simply absent
/// and left for the schema to judge.
pub(crate) struct Candidate(Map<String, Value>);

impl Candidate {
    pub(crate) fn object() -> Self {
        Candidate(Map::new())
    }

    pub(crate) fn field<T: Serialize>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            let value =
                serde_json::to_value(value).expect("candidate fields are plain JSON data");
            self.0.insert(key.to_string(), value);
        }
        self
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_element_takes_the_head() {
        assert_eq!(first_element(&[2754.0, 0.0, 1.0]), Some(&2754.0));
        assert_eq!(first_element::<f64>(&[]), None);
    }

    #[test]
    fn to_millis_scales_and_propagates_absence() {
        assert_eq!(to_millis(Some(1_675_874_731)), Some(1_675_874_731_000));
        assert_eq!(to_millis(None), None);
    }

    #[test]
    fn absent_fields_are_left_out_of_the_candidate() {
        let candidate = Candidate::object()
            .field("v", Some(2754.0))
            .field("ts", None::<i64>)
            .into_value();
        assert_eq!(candidate, json!({ "v": 2754.0 }));
    }
}
