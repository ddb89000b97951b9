//! Previous-Frame Latch

use car_state::CarState;
use serde::{Deserialize, Serialize};

/// Flags retained from the last emitted [`CarState`] for edge detection.
///
/// A fresh latch reads as "nothing pressed, cruise not enabled".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousFrame {
    pub gas_pressed: bool,
    pub brake_pressed: bool,
    pub cruise_enabled: bool,
    pub left_blinker: bool,
    pub right_blinker: bool,
}

impl PreviousFrame {
    /// Latch holding exactly the fields of `state`
    pub fn from_state(state: &CarState) -> Self {
        Self {
            gas_pressed: state.gas_pressed,
            brake_pressed: state.brake_pressed,
            cruise_enabled: state.cruise_state.enabled,
            left_blinker: state.left_blinker,
            right_blinker: state.right_blinker,
        }
    }
}
