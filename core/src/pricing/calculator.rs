//! Itemised guide-price calculation.
//!
//! `PriceCalculator::compute` is total: every configuration, including one
//! with no doors, yields a defined breakdown. Amounts are widened to `u64`
//! and saturate rather than overflow.

use super::types::{Configuration, FinishCounts, PriceBreakdown, Tariff};

pub struct PriceCalculator {
    tariff: Tariff,
}

impl PriceCalculator {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Compute the itemised price for a configuration.
    ///
    /// A configuration with zero doors returns an all-zero breakdown; hosts
    /// must show a placeholder rather than a zero total.
    pub fn compute(&self, config: &Configuration) -> PriceBreakdown {
        if config.doors == 0 {
            return PriceBreakdown::default();
        }

        let t = &self.tariff;
        let extra_doors = config.doors.saturating_sub(t.included_doors);
        let extra_doors_cost = per_door(extra_doors, t.extra_door);

        let counts = FinishCounts::tally(&config.finishes);
        let upgrades_cost = per_door(counts.glass, t.upgrade_glass)
            .saturating_add(per_door(counts.wood, t.upgrade_wood));

        let interior_cost = if config.include_interior { u64::from(t.interior) } else { 0 };
        let exterior_cost = if config.include_exterior { u64::from(t.exterior) } else { 0 };

        let total = [extra_doors_cost, upgrades_cost, interior_cost, exterior_cost]
            .into_iter()
            .fold(u64::from(t.base), u64::saturating_add);

        PriceBreakdown {
            extra_doors_cost,
            upgrades_cost,
            interior_cost,
            exterior_cost,
            total,
        }
    }
}

fn per_door(count: u32, unit: u32) -> u64 {
    u64::from(count).saturating_mul(u64::from(unit))
}
