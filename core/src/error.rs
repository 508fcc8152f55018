use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Finish index {index} is out of range for {doors} door(s)")]
    FinishIndexOutOfRange { index: usize, doors: u32 },

    #[error("{doors} doors is more than the estimator supports (max {max})")]
    TooManyDoors { doors: u32, max: u32 },

    #[error("Unknown finish: {0}")]
    UnknownFinish(String),

    #[error("Invalid pricing: {0}")]
    InvalidPricing(String),

    #[error("Pricing parse error: {0}")]
    PricingParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
