use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the transaction amount feature, the only one the manual form
/// lets the user vary.
pub const AMOUNT_FEATURE: &str = "Amount";

/// Number of PCA components (`V1`..`V28`) in the model's input.
pub const PCA_FEATURE_COUNT: usize = 28;

/// Full feature vocabulary in the order the scoring service expects it:
/// the 28 PCA components from the Kaggle creditcard dataset followed by
/// the transaction amount.
pub fn feature_columns() -> Vec<String> {
    (1..=PCA_FEATURE_COUNT)
        .map(|i| format!("V{i}"))
        .chain(std::iter::once(AMOUNT_FEATURE.to_string()))
        .collect()
}

/// Request body for `/predict`: a flat JSON object mapping feature names
/// to numbers.
///
/// The service rejects arrays and nested structures, so the payload is
/// always a plain key-value object. Manual mode fills it from the sample
/// template plus the entered amount; JSON mode passes the user's object
/// through verbatim, including any keys the service may reject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeaturePayload(pub Map<String, Value>);

impl FeaturePayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed JSON object without touching its entries.
    pub fn from_object(object: Map<String, Value>) -> Self {
        Self(object)
    }

    /// Set a feature to a finite numeric value.
    pub fn set_number(&mut self, name: &str, value: f64) {
        self.0.insert(name.to_string(), Value::from(value));
    }

    /// Numeric value of a feature, if present and a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(Value::as_f64)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_columns_order_and_count() {
        let columns = feature_columns();
        assert_eq!(columns.len(), PCA_FEATURE_COUNT + 1);
        assert_eq!(columns.first().map(String::as_str), Some("V1"));
        assert_eq!(columns[27], "V28");
        assert_eq!(columns.last().map(String::as_str), Some(AMOUNT_FEATURE));
    }

    #[test]
    fn test_payload_serializes_as_flat_object() {
        let mut payload = FeaturePayload::default();
        payload.set_number("V1", -1.359807);
        payload.set_number(AMOUNT_FEATURE, 149.62);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"V1": -1.359807, "Amount": 149.62})
        );
    }

    #[test]
    fn test_payload_roundtrips_through_object() {
        let object = serde_json::json!({"V1": 0.5, "Amount": 12.0});
        let map = object.as_object().unwrap().clone();
        let payload = FeaturePayload::from_object(map);

        assert_eq!(payload.number("V1"), Some(0.5));
        assert_eq!(payload.number(AMOUNT_FEATURE), Some(12.0));
        assert_eq!(payload.number("V2"), None);
        assert_eq!(payload.len(), 2);
    }
}
