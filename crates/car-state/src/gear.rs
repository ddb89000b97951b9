//! Gear Indication

use serde::{Deserialize, Serialize};

/// Gear category as reported by a single source or resolved for the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GearShifter {
    #[default]
    Unknown,
    Park,
    Drive,
    Neutral,
    Reverse,
    Sport,
    Low,
    Brake,
    Eco,
    Manumatic,
}

/// The three independent gear readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GearSources {
    /// Primary shifter position
    pub shifter: GearShifter,
    /// Transmission control unit report
    pub tcu: GearShifter,
    /// Instrument cluster display
    pub cluster: GearShifter,
}

impl GearSources {
    /// True only when every source reports drive
    pub fn all_drive(&self) -> bool {
        self.shifter == GearShifter::Drive
            && self.tcu == GearShifter::Drive
            && self.cluster == GearShifter::Drive
    }

    /// Resolved gear category.
    ///
    /// Drive requires consensus of all three sources. Any other category is
    /// taken from the primary shifter alone; a primary "drive" that the other
    /// sources do not confirm resolves to `Unknown`.
    pub fn resolve(&self) -> GearShifter {
        if self.all_drive() {
            GearShifter::Drive
        } else if self.shifter == GearShifter::Drive {
            GearShifter::Unknown
        } else {
            self.shifter
        }
    }
}
