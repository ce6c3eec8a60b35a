//! Interpretation of the `/predict` reply.

use common::{ErrorResponse, PredictionResponse};
use serde_json::Value;

use crate::error::{Result, SubmitError};

const PREDICTION_FAILED_FALLBACK: &str = "Prediction failed.";

/// Map a raw HTTP exchange onto the submit outcome.
///
/// `status_ok` is whether the status code was 2xx and `body` is the reply
/// decoded as JSON, or `None` when the body was not valid JSON. A failure
/// status carries the server's `error` message when it sent a usable one. A
/// success status whose body does not hold a prediction counts as a transport
/// failure, same as an unreadable body.
pub fn interpret_reply(status_ok: bool, body: Option<Value>) -> Result<PredictionResponse> {
    if !status_ok {
        let message = body
            .and_then(|value| serde_json::from_value::<ErrorResponse>(value).ok())
            .map(|reply| reply.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| PREDICTION_FAILED_FALLBACK.to_string());
        log::debug!("prediction rejected by the service: {message}");
        return Err(SubmitError::PredictionFailed(message));
    }

    let Some(body) = body else {
        log::warn!("prediction reply body was not valid JSON");
        return Err(SubmitError::Network);
    };
    serde_json::from_value(body).map_err(|error| {
        log::warn!("prediction reply could not be decoded: {error}");
        SubmitError::Network
    })
}
