use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sentiment_inference::InferenceError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body missing, not a JSON object, or without a string `text` field.
    #[error("Missing 'text' in request")]
    InvalidRequest,

    #[error("Prediction failed")]
    Inference(#[from] InferenceError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
