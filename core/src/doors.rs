//! Per-door finish assignment and door-count defaulting.

use tracing::{debug, warn};

use crate::error::{EstimatorError, Result};
use crate::pricing::{Configuration, DoorBand, Finish};

/// Largest door count a configuration may hold.
pub const MAX_DOORS: u32 = 64;

/// Door count a band change should leave in place.
///
/// The sentinel band clears the count. Otherwise an unset or out-of-band
/// count snaps to the band minimum, and a count already inside the band is
/// kept even if it is no longer the minimum.
pub fn doors_for_band(previous_doors: u32, band: &DoorBand) -> u32 {
    if band.is_out_of_range() {
        0
    } else if previous_doors == 0 || !band.contains(previous_doors) {
        band.min_doors
    } else {
        previous_doors
    }
}

/// Grow with `Mirror` or truncate from the end so `finishes.len() == doors`.
/// Entries below the new length are never touched.
pub fn resize_finishes(finishes: &mut Vec<Finish>, doors: u32) {
    finishes.resize(doors as usize, Finish::Mirror);
}

/// Holds the session's door count, finishes and add-on toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoorConfigurationStore {
    config: Configuration,
}

impl DoorConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn doors(&self) -> u32 {
        self.config.doors
    }

    pub fn finishes(&self) -> &[Finish] {
        &self.config.finishes
    }

    /// Re-evaluate the door count against a freshly resolved band.
    pub fn on_band_changed(&mut self, band: &DoorBand) {
        let doors = doors_for_band(self.config.doors, band);
        if doors != self.config.doors {
            debug!(
                "Band '{}' moves doors {} -> {}",
                band.label, self.config.doors, doors
            );
        }
        self.resize(doors);
    }

    /// Set the door count directly. Counts above [`MAX_DOORS`] are rejected
    /// and leave the configuration unchanged.
    pub fn set_doors(&mut self, doors: u32) -> Result<()> {
        if doors > MAX_DOORS {
            warn!("Rejected door count {} (max {})", doors, MAX_DOORS);
            return Err(EstimatorError::TooManyDoors {
                doors,
                max: MAX_DOORS,
            });
        }
        self.resize(doors);
        Ok(())
    }

    fn resize(&mut self, doors: u32) {
        self.config.doors = doors;
        resize_finishes(&mut self.config.finishes, doors);
    }

    /// Replace the finish of one door. Fails without changing anything when
    /// `index` is not below the current door count.
    pub fn set_finish(&mut self, index: usize, finish: Finish) -> Result<()> {
        match self.config.finishes.get_mut(index) {
            Some(slot) => {
                *slot = finish;
                Ok(())
            }
            None => {
                warn!(
                    "Rejected finish {} for door {} of {}",
                    finish, index, self.config.doors
                );
                Err(EstimatorError::FinishIndexOutOfRange {
                    index,
                    doors: self.config.doors,
                })
            }
        }
    }

    pub fn set_include_interior(&mut self, include: bool) {
        self.config.include_interior = include;
    }

    pub fn set_include_exterior(&mut self, include: bool) {
        self.config.include_exterior = include;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(min: u32) -> DoorBand {
        DoorBand {
            min_doors: min,
            max_doors: min + 1,
            label: format!("{} doors", min),
        }
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let store = DoorConfigurationStore::new();
        assert_eq!(store.doors(), 0);
        assert!(store.finishes().is_empty());
        assert!(!store.configuration().include_interior);
        assert!(!store.configuration().include_exterior);
    }

    #[test]
    fn test_doors_for_band_defaults_unset_count() {
        assert_eq!(doors_for_band(0, &band(3)), 3);
    }

    #[test]
    fn test_doors_for_band_snaps_out_of_band_count() {
        assert_eq!(doors_for_band(2, &band(4)), 4);
        assert_eq!(doors_for_band(6, &band(2)), 2);
    }

    #[test]
    fn test_doors_for_band_preserves_valid_choice() {
        assert_eq!(doors_for_band(3, &band(2)), 3);
        // Still inside the next band up, so the choice survives.
        assert_eq!(doors_for_band(3, &band(3)), 3);
    }

    #[test]
    fn test_doors_for_band_sentinel_clears() {
        assert_eq!(doors_for_band(4, &DoorBand::out_of_range()), 0);
    }

    #[test]
    fn test_on_band_changed_resizes_finishes() {
        let mut store = DoorConfigurationStore::new();
        store.on_band_changed(&band(3));
        assert_eq!(store.doors(), 3);
        assert_eq!(store.finishes(), &[Finish::Mirror; 3]);

        store.on_band_changed(&DoorBand::out_of_range());
        assert_eq!(store.doors(), 0);
        assert!(store.finishes().is_empty());
    }

    #[test]
    fn test_grow_appends_mirror() {
        let mut store = DoorConfigurationStore::new();
        store.set_doors(2).unwrap();
        store.set_finish(0, Finish::Wood).unwrap();
        store.set_finish(1, Finish::Glass).unwrap();

        store.set_doors(4).unwrap();
        assert_eq!(
            store.finishes(),
            &[Finish::Wood, Finish::Glass, Finish::Mirror, Finish::Mirror]
        );
    }

    #[test]
    fn test_shrink_truncates_from_end() {
        let mut store = DoorConfigurationStore::new();
        store.set_doors(4).unwrap();
        store.set_finish(0, Finish::Glass).unwrap();
        store.set_finish(3, Finish::Wood).unwrap();

        store.set_doors(2).unwrap();
        assert_eq!(store.finishes(), &[Finish::Glass, Finish::Mirror]);
    }

    #[test]
    fn test_grow_then_shrink_restores_preserved_entries() {
        let mut store = DoorConfigurationStore::new();
        store.set_doors(3).unwrap();
        store.set_finish(0, Finish::Wood).unwrap();
        store.set_finish(2, Finish::Glass).unwrap();
        let original = store.finishes().to_vec();

        store.set_doors(6).unwrap();
        store.set_doors(3).unwrap();
        assert_eq!(store.finishes(), original.as_slice());
    }

    #[test]
    fn test_length_tracks_doors_after_any_sequence() {
        let mut store = DoorConfigurationStore::new();
        for doors in [2, 5, 0, 3, 3, 6, 1, 4] {
            store.set_doors(doors).unwrap();
            assert_eq!(store.finishes().len(), doors as usize);
        }
    }

    #[test]
    fn test_set_finish_out_of_range_fails_without_change() {
        let mut store = DoorConfigurationStore::new();
        store.set_doors(2).unwrap();
        let before = store.clone();

        let err = store.set_finish(2, Finish::Wood).unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::FinishIndexOutOfRange { index: 2, doors: 2 }
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_set_doors_above_max_fails_without_change() {
        let mut store = DoorConfigurationStore::new();
        store.set_doors(3).unwrap();
        let before = store.clone();

        let err = store.set_doors(20_000_000).unwrap_err();
        assert!(matches!(
            err,
            EstimatorError::TooManyDoors {
                doors: 20_000_000,
                max: MAX_DOORS
            }
        ));
        assert_eq!(store, before);

        store.set_doors(MAX_DOORS).unwrap();
        assert_eq!(store.finishes().len(), MAX_DOORS as usize);
    }

    #[test]
    fn test_set_finish_with_no_doors_fails() {
        let mut store = DoorConfigurationStore::new();
        assert!(store.set_finish(0, Finish::Glass).is_err());
    }

    #[test]
    fn test_add_on_toggles_leave_doors_alone() {
        let mut store = DoorConfigurationStore::new();
        store.set_doors(3).unwrap();
        store.set_include_interior(true);
        store.set_include_exterior(true);
        assert_eq!(store.doors(), 3);
        assert_eq!(store.finishes().len(), 3);
        assert!(store.configuration().include_interior);
        assert!(store.configuration().include_exterior);
    }
}
