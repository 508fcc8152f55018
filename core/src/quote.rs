//! One-shot quotes for non-interactive hosts.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::estimator::{Estimator, EstimatorInput, EstimatorSnapshot};
use crate::pricing::{Finish, PricingConfig};

/// A whole visitor session described up front.
///
/// Finishes are assigned to doors in order; doors without a listed finish
/// stay `Mirror`. Leaving `doors` unset keeps the width's default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub doors: Option<u32>,
    pub finishes: Vec<Finish>,
    pub include_interior: bool,
    pub include_exterior: bool,
}

impl QuoteRequest {
    /// Inputs in the order a visitor would enter them.
    pub fn inputs(&self) -> Vec<EstimatorInput> {
        let mut inputs = vec![
            EstimatorInput::Width(self.width_mm),
            EstimatorInput::Height(self.height_mm),
        ];
        if let Some(doors) = self.doors {
            inputs.push(EstimatorInput::Doors(doors));
        }
        inputs.extend(
            self.finishes
                .iter()
                .enumerate()
                .map(|(index, &finish)| EstimatorInput::Finish { index, finish }),
        );
        inputs.push(EstimatorInput::Interior(self.include_interior));
        inputs.push(EstimatorInput::Exterior(self.include_exterior));
        inputs
    }

    /// Replay the request through a fresh estimator.
    pub fn quote(&self, pricing: PricingConfig) -> Result<EstimatorSnapshot> {
        let mut estimator = Estimator::with_pricing(pricing);
        for input in self.inputs() {
            estimator.apply(input)?;
        }
        Ok(estimator.snapshot())
    }
}
