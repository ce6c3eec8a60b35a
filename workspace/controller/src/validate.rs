//! Form validation and request payload assembly.
//!
//! Two entry modes share one submit path. When the raw JSON box holds any
//! non-whitespace text it wins, and the parsed object is sent exactly as
//! typed. Otherwise the manual fields are parsed and merged over the sample
//! transaction defaults.

use common::{AMOUNT_FEATURE, FeaturePayload};
use serde_json::Value;

use crate::error::ValidationError;
use crate::sample;

/// Feature columns the form exposes as individual inputs. Every other column
/// comes from [`sample::feature_defaults`].
pub const MANUAL_FIELDS: [&str; 1] = [AMOUNT_FEATURE];

/// Raw text state of the form controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub amount: String,
    pub json_text: String,
}

impl FormInput {
    fn manual_value(&self, field: &str) -> &str {
        match field {
            AMOUNT_FEATURE => &self.amount,
            _ => "",
        }
    }
}

/// Turn the form state into the payload to POST, or the first validation
/// failure encountered.
pub fn validate(input: &FormInput) -> Result<FeaturePayload, ValidationError> {
    if !input.json_text.trim().is_empty() {
        log::debug!("submitting raw JSON payload from the form");
        return parse_json_payload(&input.json_text);
    }
    manual_payload(input, &MANUAL_FIELDS)
}

fn parse_json_payload(text: &str) -> Result<FeaturePayload, ValidationError> {
    let value: Value = serde_json::from_str(text).map_err(|_| ValidationError::InvalidJson)?;
    match value {
        Value::Object(object) => Ok(FeaturePayload::from_object(object)),
        _ => Err(ValidationError::NotAnObject),
    }
}

fn manual_payload(input: &FormInput, fields: &[&str]) -> Result<FeaturePayload, ValidationError> {
    let mut payload = sample::feature_defaults();
    let mut has_value = false;

    for &field in fields {
        let raw = input.manual_value(field).trim();
        let number = raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::MissingOrNonNumeric(field.to_string()))?;
        payload.set_number(field, number);
        has_value = true;
    }

    if !has_value {
        return Err(ValidationError::NoAmount);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE_FEATURES;
    use serde_json::json;

    fn manual_input(amount: &str) -> FormInput {
        FormInput {
            amount: amount.to_string(),
            json_text: String::new(),
        }
    }

    fn json_input(text: &str) -> FormInput {
        FormInput {
            amount: String::new(),
            json_text: text.to_string(),
        }
    }

    #[test]
    fn test_manual_mode_merges_amount_over_defaults() {
        let payload = validate(&manual_input("42.50")).unwrap();

        assert_eq!(payload.len(), 29);
        assert_eq!(payload.number(AMOUNT_FEATURE), Some(42.5));
        for (name, value) in SAMPLE_FEATURES {
            assert_eq!(payload.number(name), Some(value), "default for {name}");
        }
    }

    #[test]
    fn test_manual_mode_trims_whitespace() {
        let payload = validate(&manual_input("  149.62 ")).unwrap();
        assert_eq!(payload.number(AMOUNT_FEATURE), Some(149.62));
    }

    #[test]
    fn test_manual_mode_rejects_blank_amount() {
        assert_eq!(
            validate(&manual_input("")),
            Err(ValidationError::MissingOrNonNumeric("Amount".to_string()))
        );
        assert_eq!(
            validate(&manual_input("   ")),
            Err(ValidationError::MissingOrNonNumeric("Amount".to_string()))
        );
    }

    #[test]
    fn test_manual_mode_rejects_non_numeric_amount() {
        assert_eq!(
            validate(&manual_input("abc")),
            Err(ValidationError::MissingOrNonNumeric("Amount".to_string()))
        );
        assert_eq!(
            validate(&manual_input("12,50")),
            Err(ValidationError::MissingOrNonNumeric("Amount".to_string()))
        );
    }

    #[test]
    fn test_manual_mode_rejects_non_finite_amount() {
        assert_eq!(
            validate(&manual_input("NaN")),
            Err(ValidationError::MissingOrNonNumeric("Amount".to_string()))
        );
        assert_eq!(
            validate(&manual_input("inf")),
            Err(ValidationError::MissingOrNonNumeric("Amount".to_string()))
        );
    }

    #[test]
    fn test_no_amount_when_no_field_configured() {
        let result = manual_payload(&manual_input("10"), &[]);
        assert_eq!(result, Err(ValidationError::NoAmount));
    }

    #[test]
    fn test_json_mode_takes_priority_over_manual_fields() {
        let input = FormInput {
            amount: "garbage".to_string(),
            json_text: r#"{"Amount": 3.0}"#.to_string(),
        };
        let payload = validate(&input).unwrap();
        assert_eq!(payload.number(AMOUNT_FEATURE), Some(3.0));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn test_json_mode_rejects_malformed_text() {
        assert_eq!(validate(&json_input("{not json")), Err(ValidationError::InvalidJson));
    }

    #[test]
    fn test_json_mode_rejects_non_objects() {
        for text in ["[1, 2]", "null", "42", "\"Amount\"", "true"] {
            assert_eq!(
                validate(&json_input(text)),
                Err(ValidationError::NotAnObject),
                "payload {text}"
            );
        }
    }

    #[test]
    fn test_json_mode_passes_object_through_untouched() {
        let original = json!({"V1": -1.2, "Amount": 10, "note": "manual review"});
        let payload = validate(&json_input(&original.to_string())).unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), original);
    }

    #[test]
    fn test_whitespace_only_json_falls_back_to_manual_mode() {
        let input = FormInput {
            amount: "20".to_string(),
            json_text: "  \n ".to_string(),
        };
        let payload = validate(&input).unwrap();
        assert_eq!(payload.number(AMOUNT_FEATURE), Some(20.0));
        assert_eq!(payload.len(), 29);
    }
}
