use meansum::AggregateResult;
use serde::Serialize;

/// Body of a successful `POST /calculate`
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub mean: f64,
    pub sum: f64,
}

impl From<AggregateResult> for CalculateResponse {
    fn from(result: AggregateResult) -> Self {
        Self {
            mean: result.mean,
            sum: result.sum,
        }
    }
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
