//! Display-ready projection of a prediction reply.

use common::{PredictionResponse, RiskBand};

/// Everything the results panel needs to render one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreView {
    /// Fraud probability clamped into the unit interval.
    pub probability: f64,
    /// The probability as a percentage with one decimal place.
    pub probability_text: String,
    /// Risk label shown in the badge, verbatim from the service.
    pub badge_text: String,
    /// DaisyUI badge modifier matching the risk band.
    pub badge_class: &'static str,
}

impl ScoreView {
    pub fn from_response(reply: &PredictionResponse) -> Self {
        let probability = reply.fraud_probability.clamp(0.0, 1.0);
        let risk = reply.risk_level.as_deref().filter(|label| !label.is_empty());

        Self {
            probability,
            probability_text: format_percentage(probability),
            badge_text: risk.unwrap_or("LOW").to_string(),
            badge_class: badge_class(RiskBand::from_label(risk)),
        }
    }
}

/// Format a unit-interval fraction as a percentage with one decimal place.
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn badge_class(band: RiskBand) -> &'static str {
    match band {
        RiskBand::High => "badge-error",
        RiskBand::Medium => "badge-warning",
        RiskBand::Low => "badge-success",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(probability: f64, risk_level: Option<&str>) -> PredictionResponse {
        PredictionResponse {
            fraud_probability: probability,
            risk_level: risk_level.map(str::to_string),
            label: None,
        }
    }

    #[test]
    fn test_high_risk_prediction() {
        let view = ScoreView::from_response(&reply(0.83, Some("HIGH")));

        assert_eq!(view.probability, 0.83);
        assert_eq!(view.probability_text, "83.0%");
        assert_eq!(view.badge_text, "HIGH");
        assert_eq!(view.badge_class, "badge-error");
    }

    #[test]
    fn test_medium_risk_prediction() {
        let view = ScoreView::from_response(&reply(0.42, Some("MEDIUM")));
        assert_eq!(view.badge_class, "badge-warning");
    }

    #[test]
    fn test_probability_is_clamped_into_the_unit_interval() {
        assert_eq!(ScoreView::from_response(&reply(1.5, None)).probability_text, "100.0%");
        assert_eq!(ScoreView::from_response(&reply(-0.2, None)).probability_text, "0.0%");
    }

    #[test]
    fn test_missing_or_empty_risk_level_defaults_to_low() {
        for level in [None, Some("")] {
            let view = ScoreView::from_response(&reply(0.01, level));
            assert_eq!(view.badge_text, "LOW");
            assert_eq!(view.badge_class, "badge-success");
        }
    }

    #[test]
    fn test_unrecognized_risk_level_is_shown_with_the_default_style() {
        let view = ScoreView::from_response(&reply(0.5, Some("SEVERE")));
        assert_eq!(view.badge_text, "SEVERE");
        assert_eq!(view.badge_class, "badge-success");
    }

    #[test]
    fn test_risk_level_match_is_case_sensitive() {
        let view = ScoreView::from_response(&reply(0.9, Some("high")));
        assert_eq!(view.badge_text, "high");
        assert_eq!(view.badge_class, "badge-success");
    }

    #[test]
    fn test_percentage_keeps_one_decimal() {
        assert_eq!(format_percentage(0.8349), "83.5%");
        assert_eq!(format_percentage(0.005), "0.5%");
        assert_eq!(format_percentage(1.0), "100.0%");
    }
}
