use common::{FeaturePayload, PredictionResponse};
use controller::error::{Result, SubmitError};
use controller::response::interpret_reply;
use gloo_net::http::Request;
use serde_json::Value;

/// POST the feature payload to the scoring endpoint and interpret the reply.
///
/// Transport problems (request never sent, connection dropped) come back as
/// [`SubmitError::Network`]; everything the server actually answered goes
/// through [`interpret_reply`].
pub async fn predict(payload: &FeaturePayload) -> Result<PredictionResponse> {
    let url = format!("{}/predict", super::api_base());
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| {
            log::error!("POST /predict - Failed to serialize request: {}", e);
            SubmitError::Network
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST /predict - Request failed: {}", e);
            SubmitError::Network
        })?;

    let status_ok = response.ok();
    if !status_ok {
        log::warn!("POST /predict - Non-OK response: {}", response.status());
    }

    let body: Option<Value> = response.json().await.ok();
    let reply = interpret_reply(status_ok, body)?;
    log::info!("POST /predict - Success");
    Ok(reply)
}
