use thiserror::Error;

/// Reasons a form submission is rejected before any request is sent.
///
/// The `Display` text of every variant is shown to the user verbatim, so the
/// wording here is part of the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid JSON format.")]
    InvalidJson,

    #[error("JSON payload must be an object.")]
    NotAnObject,

    /// A manual-entry field is blank or does not parse as a finite number.
    #[error("Please enter a numeric value for {0}.")]
    MissingOrNonNumeric(String),

    /// No amount field is configured for manual entry at all.
    #[error("Please enter a transaction amount.")]
    NoAmount,
}

/// Reasons a submitted request does not produce a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered, but with an error status. The payload is the
    /// server-provided message when one was present.
    #[error("{0}")]
    PredictionFailed(String),

    /// The request never completed or the reply body was unreadable.
    #[error("Network error.")]
    Network,
}

pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(ValidationError::InvalidJson.to_string(), "Invalid JSON format.");
        assert_eq!(
            ValidationError::NotAnObject.to_string(),
            "JSON payload must be an object."
        );
        assert_eq!(
            ValidationError::MissingOrNonNumeric("Amount".to_string()).to_string(),
            "Please enter a numeric value for Amount."
        );
        assert_eq!(
            ValidationError::NoAmount.to_string(),
            "Please enter a transaction amount."
        );
    }

    #[test]
    fn test_submit_error_passes_validation_text_through() {
        let err = SubmitError::from(ValidationError::InvalidJson);
        assert_eq!(err.to_string(), "Invalid JSON format.");
    }

    #[test]
    fn test_prediction_failure_uses_server_message() {
        let err = SubmitError::PredictionFailed("model unavailable".to_string());
        assert_eq!(err.to_string(), "model unavailable");
        assert_eq!(SubmitError::Network.to_string(), "Network error.");
    }
}
