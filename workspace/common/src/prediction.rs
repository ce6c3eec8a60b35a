use serde::{Deserialize, Serialize};

/// Successful `/predict` response body (2xx).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Probability that the transaction is fraudulent, nominally in
    /// [0, 1]. The client clamps it for display rather than rejecting
    /// out-of-range values.
    pub fraud_probability: f64,
    /// Severity label the service derives from the probability
    /// (below 0.30 LOW, below 0.70 MEDIUM, otherwise HIGH). Optional on
    /// the wire; display falls back to LOW when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    /// Hard fraud flag at the service's 0.5 cut. Informational only; the
    /// UI renders the probability and risk level instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<i64>,
}

/// Error body the service returns with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}

/// Severity buckets recognized for styling.
///
/// Anything other than `HIGH` or `MEDIUM`, including an absent or
/// unrecognized label, is treated as `Low`. The raw server string is
/// still shown verbatim in the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Bucket for a server-supplied risk label. Matching is exact and
    /// case-sensitive.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("HIGH") => Self::High,
            Some("MEDIUM") => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserializes_full_body() {
        let body = r#"{"fraud_probability": 0.83, "label": 1, "risk_level": "HIGH"}"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.fraud_probability, 0.83);
        assert_eq!(response.risk_level.as_deref(), Some("HIGH"));
        assert_eq!(response.label, Some(1));
    }

    #[test]
    fn test_response_tolerates_missing_optional_fields() {
        let body = r#"{"fraud_probability": 0.02}"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.fraud_probability, 0.02);
        assert_eq!(response.risk_level, None);
        assert_eq!(response.label, None);
    }

    #[test]
    fn test_response_requires_probability() {
        let body = r#"{"risk_level": "LOW"}"#;
        assert!(serde_json::from_str::<PredictionResponse>(body).is_err());
    }

    #[test]
    fn test_risk_band_buckets() {
        assert_eq!(RiskBand::from_label(Some("HIGH")), RiskBand::High);
        assert_eq!(RiskBand::from_label(Some("MEDIUM")), RiskBand::Medium);
        assert_eq!(RiskBand::from_label(Some("LOW")), RiskBand::Low);
        assert_eq!(RiskBand::from_label(Some("high")), RiskBand::Low);
        assert_eq!(RiskBand::from_label(Some("SEVERE")), RiskBand::Low);
        assert_eq!(RiskBand::from_label(None), RiskBand::Low);
    }
}
