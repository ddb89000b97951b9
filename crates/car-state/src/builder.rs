//! State Snapshot Builder

use crate::bus::BusSnapshot;
use crate::gear::GearSources;
use crate::state::{CarState, CruiseState, WheelSpeeds};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pedal travel at or below which the gas pedal is treated as released
pub const GAS_PRESSED_EPSILON: f64 = 1e-3;

/// Builder configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Gas pedal noise floor
    pub gas_pressed_epsilon: f64,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            gas_pressed_epsilon: GAS_PRESSED_EPSILON,
        }
    }
}

/// Maps a [`BusSnapshot`] into a [`CarState`]
#[derive(Debug, Clone, Default)]
pub struct CarStateBuilder {
    config: BuilderConfig,
}

impl CarStateBuilder {
    /// Create a builder with given config
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Builder configuration
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build this cycle's state snapshot
    pub fn build(&self, snapshot: &BusSnapshot) -> CarState {
        let sig = snapshot.signals();

        let can_valid =
            snapshot.primary.valid && snapshot.camera.valid && snapshot.primary.consistent;

        let cruise_enabled = sig.pcm_acc_status != 0;
        let gear_sources = GearSources {
            shifter: sig.gear_shifter,
            tcu: sig.gear_tcu,
            cluster: sig.gear_shifter_cluster,
        };

        let state = CarState {
            can_valid,

            v_ego: sig.v_ego,
            v_ego_raw: sig.v_ego_raw,
            a_ego: sig.a_ego,
            yaw_rate: sig.yaw_rate,
            standstill: sig.standstill,
            wheel_speeds: WheelSpeeds {
                fl: sig.wheel_speed_fl,
                fr: sig.wheel_speed_fr,
                rl: sig.wheel_speed_rl,
                rr: sig.wheel_speed_rr,
            },

            gas: sig.gas,
            gas_pressed: sig.gas_pedal > self.config.gas_pressed_epsilon,
            brake: sig.user_brake,
            brake_pressed: sig.brake_pressed,
            brake_lights: sig.brake_lights,

            steering_angle: sig.steering_angle,
            steering_rate: sig.steering_rate,
            steering_torque: sig.steering_torque,
            steering_pressed: sig.steer_override,

            cruise_state: CruiseState {
                enabled: cruise_enabled,
                speed: if cruise_enabled { sig.cruise_set_speed } else { 0.0 },
                available: sig.main_on,
                standstill: false,
            },

            left_blinker: sig.left_blinker_on,
            right_blinker: sig.right_blinker_on,
            door_open: !sig.door_all_closed,
            seatbelt_unlatched: !sig.seatbelt,

            gear_shifter: gear_sources.resolve(),
            gear_sources,

            esp_disabled: sig.esp_disabled,
            steer_fault: sig.steer_error,
            low_speed_alert: sig.low_speed_alert,
        };

        trace!(can_valid, v_ego = state.v_ego, "built car state");
        state
    }
}
