use leptos::logging::warn;
use leptos::prelude::*;
use wardrobe_core::pricing::Tariff;
use wardrobe_core::{Estimator, EstimatorInput, EstimatorSnapshot};

/// Shared estimator state. Every control dispatches through here so the
/// recompute order lives in one place.
#[derive(Clone, Copy)]
pub struct EstimatorContext {
    estimator: RwSignal<Estimator>,
    pub snapshot: Memo<EstimatorSnapshot>,
}

impl EstimatorContext {
    pub fn new() -> Self {
        let estimator = RwSignal::new(Estimator::new());
        let snapshot = Memo::new(move |_| estimator.with(|est| est.snapshot()));
        Self {
            estimator,
            snapshot,
        }
    }

    pub fn dispatch(&self, input: EstimatorInput) {
        self.estimator.update(|est| {
            if let Err(e) = est.apply(input) {
                warn!("Rejected estimator input: {}", e);
            }
        });
    }

    pub fn tariff(&self) -> Tariff {
        self.estimator.with_untracked(|est| est.tariff().clone())
    }

    pub fn width_domain(&self) -> (u32, u32) {
        self.estimator
            .with_untracked(|est| est.width_domain())
            .unwrap_or((0, 0))
    }
}

pub fn use_estimator() -> EstimatorContext {
    expect_context::<EstimatorContext>()
}

/// Parse a millimetre field. Blank or unparsable text counts as not entered.
pub fn parse_mm(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
