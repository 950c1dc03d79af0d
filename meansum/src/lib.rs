//! Mean and sum aggregation over lists of numbers.
//!
//! ```
//! use meansum::aggregate;
//!
//! let result = aggregate(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(result.sum, 6.0);
//! assert_eq!(result.mean, 2.0);
//! ```

pub mod aggregate;
pub mod error;
pub mod exact;

pub use aggregate::{aggregate, AggregateResult, NumberList};
pub use error::{MeanSumError, Result};
pub use exact::ExactSum;
