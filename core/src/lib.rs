pub mod doors;
mod error;
pub mod estimator;
pub mod money;
pub mod preview;
pub mod pricing;
pub mod quote;

pub use error::{EstimatorError, Result};
pub use estimator::{Estimator, EstimatorInput, EstimatorSnapshot, Measurement};
pub use quote::QuoteRequest;
