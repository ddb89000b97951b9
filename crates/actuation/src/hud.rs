//! HUD Alert Lookup

use crate::control::{AudibleAlert, VisualAlert};
use serde::{Deserialize, Serialize};

/// HUD warning code written into the LKAS frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HudAlert(pub u8);

impl HudAlert {
    pub const NONE: HudAlert = HudAlert(0);
    pub const STEER_REQUIRED: HudAlert = HudAlert(3);
    pub const STEER_REQUIRED_AUDIBLE: HudAlert = HudAlert(4);

    /// Raw code
    pub fn code(&self) -> u8 {
        self.0
    }
}

/// Classify a visual/audible alert pair into the HUD code.
///
/// Only a take-over request is shown; it escalates when a chime accompanies it.
pub fn hud_alert(visual: VisualAlert, audible: AudibleAlert) -> HudAlert {
    match (visual, audible) {
        (VisualAlert::SteerRequired, AudibleAlert::None) => HudAlert::STEER_REQUIRED,
        (VisualAlert::SteerRequired, _) => HudAlert::STEER_REQUIRED_AUDIBLE,
        _ => HudAlert::NONE,
    }
}
