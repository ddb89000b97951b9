//! Decoded Bus Readings
//!
//! One cycle's output from the external bus decoders. Each reading carries
//! its own validity flag; nothing here is ever an error.

use crate::gear::GearShifter;
use serde::{Deserialize, Serialize};

/// Named signals decoded from the primary vehicle bus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusSignals {
    /// Filtered longitudinal speed (m/s)
    pub v_ego: f64,
    /// Unfiltered longitudinal speed (m/s)
    pub v_ego_raw: f64,
    /// Longitudinal acceleration (m/s^2)
    pub a_ego: f64,
    /// Yaw rate (rad/s)
    pub yaw_rate: f64,
    pub standstill: bool,

    /// Wheel speeds (m/s)
    pub wheel_speed_fl: f64,
    pub wheel_speed_fr: f64,
    pub wheel_speed_rl: f64,
    pub wheel_speed_rr: f64,

    /// Throttle reported by the engine controller (0..1)
    pub gas: f64,
    /// Accelerator pedal position (0..1)
    pub gas_pedal: f64,
    pub user_brake: f64,
    pub brake_pressed: bool,
    pub brake_lights: bool,

    /// Steering wheel angle (deg)
    pub steering_angle: f64,
    /// Steering wheel rate (deg/s, unsigned)
    pub steering_rate: f64,
    /// Driver torque on the wheel
    pub steering_torque: f64,
    pub steer_override: bool,

    /// PCM adaptive cruise status code; non-zero means engaged
    pub pcm_acc_status: u8,
    /// Cruise set speed as reported (m/s), meaningful only while engaged
    pub cruise_set_speed: f64,
    /// Main assistance switch
    pub main_on: bool,

    pub left_blinker_on: bool,
    pub right_blinker_on: bool,
    pub door_all_closed: bool,
    /// Driver seatbelt latched
    pub seatbelt: bool,

    pub gear_shifter: GearShifter,
    pub gear_tcu: GearShifter,
    pub gear_shifter_cluster: GearShifter,

    pub esp_disabled: bool,
    pub steer_error: bool,
    pub low_speed_alert: bool,
}

/// Primary bus reading for one cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryReading {
    /// All expected messages arrived in time
    pub valid: bool,
    /// Decoder's internal per-parser consistency check passed
    pub consistent: bool,
    pub signals: BusSignals,
}

/// Secondary (camera / ADAS unit) bus reading for one cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraReading {
    pub valid: bool,
    /// Lane lines reported by the LKAS camera
    pub lanes: u8,
    /// Camera is requesting lane keeping
    pub lkas_request: bool,
}

/// Everything the decoders produced for one cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusSnapshot {
    pub primary: PrimaryReading,
    pub camera: CameraReading,
}

impl BusSnapshot {
    /// Snapshot with both buses valid and consistent
    pub fn valid(signals: BusSignals) -> Self {
        Self {
            primary: PrimaryReading {
                valid: true,
                consistent: true,
                signals,
            },
            camera: CameraReading {
                valid: true,
                ..Default::default()
            },
        }
    }

    /// Primary bus signals
    pub fn signals(&self) -> &BusSignals {
        &self.primary.signals
    }
}
