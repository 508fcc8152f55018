//! Type definitions for the sizing and pricing engine.
//!
//! These types support both TOML deserialization (for loading the tariff
//! and band table) and JSON serialization (for hosts rendering a quote).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root configuration loaded from pricing.toml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Fixed price list applied to every configuration
    pub tariff: Tariff,
    /// Width bands, in ascending width order
    pub bands: Vec<BandRule>,
}

/// Fixed price list. All amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tariff {
    /// Covers `included_doors` mirror doors, running gear and fitting
    pub base: u32,
    /// Number of doors already paid for by `base`
    #[serde(default = "default_included_doors")]
    pub included_doors: u32,
    /// Charge for each door beyond `included_doors`
    pub extra_door: u32,
    /// Per-door upcharge for a coloured glass finish
    pub upgrade_glass: u32,
    /// Per-door upcharge for a wood finish
    pub upgrade_wood: u32,
    /// Flat charge for interior fit-out
    pub interior: u32,
    /// Flat charge for exterior work
    pub exterior: u32,
}

fn default_included_doors() -> u32 {
    2
}

impl Tariff {
    /// Per-door upcharge for the given finish. Mirror is the standard and costs nothing extra.
    pub fn upcharge(&self, finish: Finish) -> u32 {
        match finish {
            Finish::Mirror => 0,
            Finish::Glass => self.upgrade_glass,
            Finish::Wood => self.upgrade_wood,
        }
    }
}

/// One row of the width band table: a closed millimetre interval and the door range it allows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BandRule {
    pub min_width_mm: u32,
    pub max_width_mm: u32,
    pub min_doors: u32,
    pub max_doors: u32,
    pub label: String,
}

impl BandRule {
    pub fn matches(&self, width_mm: f64) -> bool {
        width_mm >= f64::from(self.min_width_mm) && width_mm <= f64::from(self.max_width_mm)
    }

    pub fn to_band(&self) -> DoorBand {
        DoorBand {
            min_doors: self.min_doors,
            max_doors: self.max_doors,
            label: self.label.clone(),
        }
    }
}

// =============================================================================
// SESSION TYPES
// =============================================================================

/// Surface finish of a single sliding door.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    #[default]
    Mirror,
    Glass,
    Wood,
}

impl Finish {
    pub const ALL: [Finish; 3] = [Finish::Mirror, Finish::Glass, Finish::Wood];

    pub fn as_str(&self) -> &'static str {
        match self {
            Finish::Mirror => "mirror",
            Finish::Glass => "glass",
            Finish::Wood => "wood",
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Finish {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mirror" => Ok(Finish::Mirror),
            "glass" => Ok(Finish::Glass),
            "wood" => Ok(Finish::Wood),
            other => Err(EstimatorError::UnknownFinish(other.to_string())),
        }
    }
}

/// Allowed door-count range for an opening width.
///
/// The sentinel band (`min_doors == 0`) means the width is absent or outside
/// every row of the table; door selection and quoting are disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoorBand {
    pub min_doors: u32,
    pub max_doors: u32,
    pub label: String,
}

pub const OUT_OF_RANGE_LABEL: &str = "Out of range";

impl DoorBand {
    pub fn out_of_range() -> Self {
        Self {
            min_doors: 0,
            max_doors: 0,
            label: OUT_OF_RANGE_LABEL.to_string(),
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        self.min_doors == 0
    }

    pub fn contains(&self, doors: u32) -> bool {
        !self.is_out_of_range() && doors >= self.min_doors && doors <= self.max_doors
    }

    /// Door counts a selector should offer, empty for the sentinel band.
    pub fn door_options(&self) -> Vec<u32> {
        if self.is_out_of_range() {
            return Vec::new();
        }
        (self.min_doors..=self.max_doors).collect()
    }
}

/// Door count, per-door finishes and add-ons for one visitor session.
///
/// `finishes.len()` always equals `doors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub doors: u32,
    pub finishes: Vec<Finish>,
    pub include_interior: bool,
    pub include_exterior: bool,
}

/// Number of doors carrying each finish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FinishCounts {
    pub mirror: u32,
    pub glass: u32,
    pub wood: u32,
}

impl FinishCounts {
    pub fn tally(finishes: &[Finish]) -> Self {
        let mut counts = Self::default();
        for finish in finishes {
            match finish {
                Finish::Mirror => counts.mirror += 1,
                Finish::Glass => counts.glass += 1,
                Finish::Wood => counts.wood += 1,
            }
        }
        counts
    }
}

/// Itemised guide price. A zero `total` means "no quote yet", never a price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub extra_doors_cost: u64,
    pub upgrades_cost: u64,
    pub interior_cost: u64,
    pub exterior_cost: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_deserialize() {
        let finish: Finish = serde_json::from_str(r#""glass""#).unwrap();
        assert_eq!(finish, Finish::Glass);

        let finish: Finish = serde_json::from_str(r#""wood""#).unwrap();
        assert_eq!(finish, Finish::Wood);
    }

    #[test]
    fn test_finish_from_str_is_case_insensitive() {
        assert_eq!("Mirror".parse::<Finish>().unwrap(), Finish::Mirror);
        assert_eq!(" WOOD ".parse::<Finish>().unwrap(), Finish::Wood);
        assert!(matches!(
            "oak".parse::<Finish>(),
            Err(EstimatorError::UnknownFinish(name)) if name == "oak"
        ));
    }

    #[test]
    fn test_default_finish_is_mirror() {
        assert_eq!(Finish::default(), Finish::Mirror);
    }

    #[test]
    fn test_door_options() {
        let band = DoorBand {
            min_doors: 3,
            max_doors: 4,
            label: "2400–3599mm".to_string(),
        };
        assert_eq!(band.door_options(), vec![3, 4]);
        assert!(band.contains(3));
        assert!(!band.contains(5));

        let sentinel = DoorBand::out_of_range();
        assert!(sentinel.door_options().is_empty());
        assert!(!sentinel.contains(0));
        assert_eq!(sentinel.label, "Out of range");
    }

    #[test]
    fn test_finish_counts_tally() {
        let counts = FinishCounts::tally(&[
            Finish::Mirror,
            Finish::Glass,
            Finish::Wood,
            Finish::Mirror,
        ]);
        assert_eq!(counts.mirror, 2);
        assert_eq!(counts.glass, 1);
        assert_eq!(counts.wood, 1);
    }

    #[test]
    fn test_price_breakdown_serialize() {
        let json = serde_json::to_string(&PriceBreakdown::default()).unwrap();
        assert!(json.contains("extra_doors_cost"));
        assert!(json.contains("total"));
    }
}
