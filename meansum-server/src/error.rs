use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use meansum::MeanSumError;

use crate::dto::response::ErrorResponse;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<MeanSumError> for ApiError {
    fn from(err: MeanSumError) -> Self {
        match err {
            MeanSumError::EmptyInput | MeanSumError::Overflow => {
                ApiError::unprocessable(err.to_string())
            }
            MeanSumError::NonFinite { .. } => ApiError::bad_request(err.to_string()),
        }
    }
}

// axum reports shape errors as 422; they are malformed requests here.
// Everything else keeps axum's status, e.g. 413 for an oversized body.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::bad_request(rejection.body_text())
            }
            _ => ApiError::new(rejection.status(), rejection.body_text()),
        }
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
