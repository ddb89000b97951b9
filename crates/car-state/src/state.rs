//! Canonical Vehicle State

use crate::gear::{GearShifter, GearSources};
use serde::{Deserialize, Serialize};

/// Individual wheel speeds (m/s)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelSpeeds {
    pub fl: f64,
    pub fr: f64,
    pub rl: f64,
    pub rr: f64,
}

/// Adaptive cruise state
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CruiseState {
    pub enabled: bool,
    /// Set speed (m/s); always 0 while not enabled
    pub speed: f64,
    pub available: bool,
    pub standstill: bool,
}

/// Immutable snapshot of the vehicle for one cycle.
///
/// Built fresh every cycle; consumers never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarState {
    /// Primary valid AND camera valid AND primary consistent
    pub can_valid: bool,

    pub v_ego: f64,
    pub v_ego_raw: f64,
    pub a_ego: f64,
    pub yaw_rate: f64,
    pub standstill: bool,
    pub wheel_speeds: WheelSpeeds,

    pub gas: f64,
    pub gas_pressed: bool,
    pub brake: f64,
    pub brake_pressed: bool,
    pub brake_lights: bool,

    pub steering_angle: f64,
    pub steering_rate: f64,
    pub steering_torque: f64,
    pub steering_pressed: bool,

    pub cruise_state: CruiseState,

    pub left_blinker: bool,
    pub right_blinker: bool,
    pub door_open: bool,
    pub seatbelt_unlatched: bool,

    /// Resolved gear category
    pub gear_shifter: GearShifter,
    /// Raw readings the category was resolved from
    pub gear_sources: GearSources,

    pub esp_disabled: bool,
    pub steer_fault: bool,
    pub low_speed_alert: bool,
}
