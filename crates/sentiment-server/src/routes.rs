use actix_web::{HttpResponse, web};
use sentiment_inference::Predictor;
use serde_json::Value;
use tracing::{error, warn};

use crate::error::ApiError;

pub const LIVENESS_MESSAGE: &str = "Twitter Sentiment API is Running";

#[allow(clippy::unused_async)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

/// Pull the `text` string out of a JSON object body.
///
/// Any content type is accepted; only the bytes matter.
pub(crate) fn extract_text(body: &[u8]) -> Result<String, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidRequest)?;
    value
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ApiError::InvalidRequest)
}

#[allow(clippy::unused_async)]
pub async fn predict(
    predictor: web::Data<Predictor>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let text = extract_text(&body).inspect_err(|_| {
        warn!(body_len = body.len(), "Rejected request without text");
    })?;

    let prediction = predictor.predict(&text).inspect_err(|e| {
        error!(error = %e, "Prediction failed");
    })?;

    Ok(HttpResponse::Ok().json(prediction))
}
