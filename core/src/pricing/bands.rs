//! Width-to-door-band resolution.

use super::types::{BandRule, DoorBand};

/// Maps an opening width onto the band table, first match wins.
#[derive(Debug, Clone)]
pub struct BandResolver {
    bands: Vec<BandRule>,
}

impl BandResolver {
    pub fn new(bands: Vec<BandRule>) -> Self {
        Self { bands }
    }

    /// Inclusive width domain covered by the table.
    pub fn domain(&self) -> Option<(u32, u32)> {
        Some((self.bands.first()?.min_width_mm, self.bands.last()?.max_width_mm))
    }

    /// True when the width is present, finite and inside the table's domain.
    ///
    /// A fractional width that falls between two integer rows is still "in
    /// range" here but resolves to the sentinel band.
    pub fn in_range(&self, width_mm: Option<f64>) -> bool {
        match (width_mm, self.domain()) {
            (Some(w), Some((min, max))) => {
                w.is_finite() && w >= f64::from(min) && w <= f64::from(max)
            }
            _ => false,
        }
    }

    /// Resolve the allowed door range for a width. Never fails: absent,
    /// non-finite or out-of-domain widths give the "Out of range" sentinel.
    pub fn resolve(&self, width_mm: Option<f64>) -> DoorBand {
        match width_mm {
            Some(width) if self.in_range(width_mm) => self
                .bands
                .iter()
                .find(|rule| rule.matches(width))
                .map(BandRule::to_band)
                .unwrap_or_else(DoorBand::out_of_range),
            _ => DoorBand::out_of_range(),
        }
    }
}
