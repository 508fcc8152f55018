//! TOML loading and validation for the tariff and width bands.
//!
//! Provides two loading methods:
//! - `default_pricing()` - Loads the price list compiled into the binary
//! - `load_pricing(path)` - Loads an override price list from a file path

use std::path::Path;

use tracing::info;

use super::types::PricingConfig;
use crate::doors::MAX_DOORS;
use crate::error::{EstimatorError, Result};

/// Default pricing embedded in the binary at compile time.
/// Loaded from `core/config/pricing.toml`.
const DEFAULT_PRICING: &str = include_str!("../../config/pricing.toml");

/// Load and validate a pricing document from the given path.
///
/// # Returns
/// * `Ok(PricingConfig)` - Parsed and validated configuration
/// * `Err` - If the file cannot be read, the TOML is invalid, or the band table is inconsistent
pub fn load_pricing(path: &Path) -> Result<PricingConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: PricingConfig = toml::from_str(&content)?;
    config.validate()?;
    info!(
        "Loaded pricing from {} ({} bands)",
        path.display(),
        config.bands.len()
    );
    Ok(config)
}

/// Get the default pricing embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_pricing() -> PricingConfig {
    let config: PricingConfig =
        toml::from_str(DEFAULT_PRICING).expect("embedded pricing.toml must be valid TOML");
    debug_assert!(config.validate().is_ok(), "embedded pricing.toml must validate");
    config
}

impl PricingConfig {
    /// Check that the band table partitions a single width domain and the tariff is usable.
    pub fn validate(&self) -> Result<()> {
        if self.bands.is_empty() {
            return Err(EstimatorError::InvalidPricing(
                "band table is empty".to_string(),
            ));
        }
        if self.tariff.included_doors == 0 {
            return Err(EstimatorError::InvalidPricing(
                "tariff must include at least one door".to_string(),
            ));
        }

        for (i, band) in self.bands.iter().enumerate() {
            if band.min_width_mm > band.max_width_mm {
                return Err(EstimatorError::InvalidPricing(format!(
                    "band '{}' starts after it ends ({} > {})",
                    band.label, band.min_width_mm, band.max_width_mm
                )));
            }
            if band.min_doors == 0 {
                return Err(EstimatorError::InvalidPricing(format!(
                    "band '{}' must allow at least one door",
                    band.label
                )));
            }
            let next_door_count = band.min_doors.checked_add(1).ok_or_else(|| {
                EstimatorError::InvalidPricing(format!(
                    "band '{}' min_doors {} is too large",
                    band.label, band.min_doors
                ))
            })?;
            if band.max_doors != next_door_count {
                return Err(EstimatorError::InvalidPricing(format!(
                    "band '{}' must span exactly two door counts, got {}..={}",
                    band.label, band.min_doors, band.max_doors
                )));
            }
            if band.max_doors > MAX_DOORS {
                return Err(EstimatorError::InvalidPricing(format!(
                    "band '{}' allows {} doors, more than the maximum of {}",
                    band.label, band.max_doors, MAX_DOORS
                )));
            }
            if i > 0 {
                let prev = &self.bands[i - 1];
                let expected_start = prev.max_width_mm.checked_add(1).ok_or_else(|| {
                    EstimatorError::InvalidPricing(format!(
                        "band '{}' ends at the largest representable width, nothing can follow it",
                        prev.label
                    ))
                })?;
                if band.min_width_mm != expected_start {
                    return Err(EstimatorError::InvalidPricing(format!(
                        "band '{}' must start at {}mm, directly after '{}'",
                        band.label, expected_start, prev.label
                    )));
                }
            }
        }

        Ok(())
    }
}
