//! Single state machine behind the estimator widget.
//!
//! Every user input goes through [`Estimator::apply`], which recomputes in a
//! fixed order: width -> band -> door count -> finish resize. The price is
//! derived from the resolved configuration on read.

use serde::Serialize;
use tracing::debug;

use crate::doors::DoorConfigurationStore;
use crate::error::Result;
use crate::preview::{map_to_preview_box, PreviewBox};
use crate::pricing::{
    default_pricing, BandResolver, Configuration, DoorBand, Finish, PriceBreakdown,
    PriceCalculator, PricingConfig, Tariff,
};

/// Opening size as entered. Either side may be absent until typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Measurement {
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
}

/// A discrete input event from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorInput {
    Width(Option<f64>),
    Height(Option<f64>),
    Doors(u32),
    Finish { index: usize, finish: Finish },
    Interior(bool),
    Exterior(bool),
    Reset,
}

/// Everything a host needs to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorSnapshot {
    pub measurement: Measurement,
    pub band: DoorBand,
    pub door_options: Vec<u32>,
    pub configuration: Configuration,
    pub price: PriceBreakdown,
    pub show_quote: bool,
    pub preview: PreviewBox,
}

pub struct Estimator {
    resolver: BandResolver,
    calculator: PriceCalculator,
    measurement: Measurement,
    band: DoorBand,
    store: DoorConfigurationStore,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator {
    /// Create an estimator using the embedded price list.
    pub fn new() -> Self {
        Self::with_pricing(default_pricing())
    }

    pub fn with_pricing(pricing: PricingConfig) -> Self {
        Self {
            resolver: BandResolver::new(pricing.bands),
            calculator: PriceCalculator::new(pricing.tariff),
            measurement: Measurement::default(),
            band: DoorBand::out_of_range(),
            store: DoorConfigurationStore::new(),
        }
    }

    /// Apply one input. Only an out-of-range finish index or an oversized
    /// door count fails, and either leaves the state untouched.
    pub fn apply(&mut self, input: EstimatorInput) -> Result<()> {
        debug!("Estimator input: {:?}", input);
        match input {
            EstimatorInput::Width(width_mm) => {
                self.measurement.width_mm = width_mm;
                self.band = self.resolver.resolve(width_mm);
                self.store.on_band_changed(&self.band);
            }
            EstimatorInput::Height(height_mm) => {
                self.measurement.height_mm = height_mm;
            }
            EstimatorInput::Doors(doors) => self.store.set_doors(doors)?,
            EstimatorInput::Finish { index, finish } => self.store.set_finish(index, finish)?,
            EstimatorInput::Interior(include) => self.store.set_include_interior(include),
            EstimatorInput::Exterior(include) => self.store.set_include_exterior(include),
            EstimatorInput::Reset => {
                self.measurement = Measurement::default();
                self.band = DoorBand::out_of_range();
                self.store = DoorConfigurationStore::new();
            }
        }
        Ok(())
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn band(&self) -> &DoorBand {
        &self.band
    }

    pub fn configuration(&self) -> &Configuration {
        self.store.configuration()
    }

    pub fn tariff(&self) -> &Tariff {
        self.calculator.tariff()
    }

    /// Inclusive widths the band table covers.
    pub fn width_domain(&self) -> Option<(u32, u32)> {
        self.resolver.domain()
    }

    pub fn width_in_range(&self) -> bool {
        self.resolver.in_range(self.measurement.width_mm)
    }

    pub fn price(&self) -> PriceBreakdown {
        self.calculator.compute(self.store.configuration())
    }

    /// A quote is only meaningful for an in-range width with at least one door.
    pub fn show_quote(&self) -> bool {
        self.width_in_range() && self.store.doors() > 0
    }

    pub fn snapshot(&self) -> EstimatorSnapshot {
        EstimatorSnapshot {
            measurement: self.measurement,
            band: self.band.clone(),
            door_options: self.band.door_options(),
            configuration: self.store.configuration().clone(),
            price: self.price(),
            show_quote: self.show_quote(),
            preview: map_to_preview_box(self.measurement.width_mm, self.measurement.height_mm),
        }
    }
}
