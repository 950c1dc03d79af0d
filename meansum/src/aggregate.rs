use serde::{Deserialize, Serialize};

use crate::error::{MeanSumError, Result};
use crate::exact::ExactSum;

/// Ordered sequence of values submitted for aggregation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NumberList(Vec<f64>);

impl NumberList {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn aggregate(&self) -> Result<AggregateResult> {
        aggregate(&self.0)
    }
}

impl From<Vec<f64>> for NumberList {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Mean and sum of a [`NumberList`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateResult {
    pub mean: f64,
    pub sum: f64,
}

/// Computes the sum and arithmetic mean of `numbers`.
///
/// `sum` is the exact sum rounded once to the nearest `f64`, so reordering
/// `numbers` never changes either field. Fails with
/// [`MeanSumError::EmptyInput`] instead of producing NaN for an empty slice,
/// and with [`MeanSumError::Overflow`] when that rounded sum is infinite.
pub fn aggregate(numbers: &[f64]) -> Result<AggregateResult> {
    if numbers.is_empty() {
        return Err(MeanSumError::EmptyInput);
    }

    if let Some(index) = numbers.iter().position(|v| !v.is_finite()) {
        return Err(MeanSumError::NonFinite { index });
    }

    let sum = numbers.iter().copied().collect::<ExactSum>().value();
    if !sum.is_finite() {
        return Err(MeanSumError::Overflow);
    }

    Ok(AggregateResult {
        mean: sum / numbers.len() as f64,
        sum,
    })
}
