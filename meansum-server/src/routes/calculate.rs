use axum::{extract::FromRequest, Json};

use crate::{
    dto::{request::CalculateRequest, response::CalculateResponse},
    error::{ApiError, ApiResult},
};

/// JSON extractor whose rejections become [`ApiError`]s.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// POST /calculate - Mean and sum of the submitted numbers
pub async fn calculate(ApiJson(req): ApiJson<CalculateRequest>) -> ApiResult<CalculateResponse> {
    let count = req.numbers.len();
    let result = req.numbers.aggregate().map_err(|e| {
        tracing::warn!(count, "Aggregation rejected: {}", e);
        ApiError::from(e)
    })?;

    tracing::debug!(count, mean = result.mean, sum = result.sum, "Aggregated numbers");
    Ok(Json(CalculateResponse::from(result)))
}
