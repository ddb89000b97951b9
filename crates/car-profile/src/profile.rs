//! Vehicle Profile and Resolver

use crate::curve::Curve;
use crate::error::ProfileError;
use crate::model::CarModel;
use crate::scaling::{scale_rot_inertia, scale_tire_stiffness, STD_CARGO_KG};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Panda safety model the vehicle runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyModel {
    NoOutput,
    Hyundai,
    Forward,
}

/// How the lateral controller drives the steering actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerControlType {
    Torque,
    Angle,
}

/// Lateral PID gains scheduled against speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateralTuning {
    pub kp: Curve,
    pub ki: Curve,
    /// Feedforward gain
    pub kf: f64,
}

/// Longitudinal PI gains and deadzone scheduled against speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalTuning {
    pub kp: Curve,
    pub ki: Curve,
    pub deadzone: Curve,
}

/// Immutable per-model constants for one driving session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub car_name: String,
    pub car_fingerprint: CarModel,
    pub car_vin: String,
    pub safety_model: SafetyModel,

    /// Stock adaptive cruise owns engagement
    pub enable_cruise: bool,
    /// No radar messages on the vehicle bus
    pub radar_off_can: bool,
    /// Stock camera present
    pub enable_camera: bool,
    /// Longitudinal control is performed by this stack rather than the car
    pub openpilot_longitudinal_control: bool,
    pub steer_limit_alert: bool,
    pub stopping_control: bool,
    pub start_accel: f64,

    /// Mass including standard cargo (kg)
    pub mass: f64,
    /// Wheelbase (m)
    pub wheelbase: f64,
    /// Center of gravity to front axle (m)
    pub center_to_front: f64,
    pub steer_ratio: f64,
    pub steer_ratio_rear: f64,
    /// Yaw rotational inertia (kg*m^2)
    pub rotational_inertia: f64,
    /// Front tire cornering stiffness (N/rad)
    pub tire_stiffness_front: f64,
    /// Rear tire cornering stiffness (N/rad)
    pub tire_stiffness_rear: f64,

    pub steer_control_type: SteerControlType,
    /// Steering actuator delay (s)
    pub steer_actuator_delay: f64,
    pub steer_rate_cost: f64,
    pub lateral_tuning: LateralTuning,
    pub longitudinal_tuning: LongitudinalTuning,

    /// Minimum engagement speed (m/s); `None` allows engaging from standstill
    pub min_enable_speed: Option<f64>,
    /// Minimum speed for steering assistance (m/s)
    pub min_steer_speed: f64,

    /// Steering command saturation vs. speed
    pub steer_max: Curve,
    /// Throttle command saturation vs. speed
    pub gas_max: Curve,
    /// Brake command saturation vs. speed
    pub brake_max: Curve,
}

impl VehicleProfile {
    /// Resolve a profile from a fingerprint string
    pub fn for_fingerprint(candidate: &str, vin: &str) -> Result<Self, ProfileError> {
        let model = candidate.parse::<CarModel>()?;
        Ok(resolve_profile(model, vin))
    }

    /// Center of gravity to rear axle (m)
    pub fn center_to_rear(&self) -> f64 {
        self.wheelbase - self.center_to_front
    }

    /// Steering saturation at speed `v_ego` (m/s)
    pub fn steer_max_at(&self, v_ego: f64) -> f64 {
        self.steer_max.interp(v_ego)
    }

    /// Throttle saturation at speed `v_ego` (m/s)
    pub fn gas_max_at(&self, v_ego: f64) -> f64 {
        self.gas_max.interp(v_ego)
    }

    /// Brake saturation at speed `v_ego` (m/s)
    pub fn brake_max_at(&self, v_ego: f64) -> f64 {
        self.brake_max.interp(v_ego)
    }

    /// Whether steering assistance may act at `v_ego` (m/s)
    pub fn can_steer_at(&self, v_ego: f64) -> bool {
        v_ego >= self.min_steer_speed
    }
}

/// Resolve the session profile for `model`.
///
/// Pure: the same model and VIN always produce an identical profile. All
/// supported models currently share one starting tune; online tuning corrects
/// from there.
pub fn resolve_profile(model: CarModel, vin: &str) -> VehicleProfile {
    let mass = 1985.0 + STD_CARGO_KG;
    let wheelbase = 2.78;
    let center_to_front = wheelbase * 0.4;
    let tire_stiffness_factor = 1.0;
    let stiffness = scale_tire_stiffness(mass, wheelbase, center_to_front, tire_stiffness_factor);

    info!("Resolved vehicle profile for {}", model);

    VehicleProfile {
        car_name: "hyundai".to_string(),
        car_fingerprint: model,
        car_vin: vin.to_string(),
        safety_model: SafetyModel::Hyundai,

        enable_cruise: true,
        radar_off_can: true,
        enable_camera: true,
        openpilot_longitudinal_control: false,
        steer_limit_alert: false,
        stopping_control: false,
        start_accel: 0.0,

        mass,
        wheelbase,
        center_to_front,
        steer_ratio: 15.0,
        steer_ratio_rear: 0.0,
        rotational_inertia: scale_rot_inertia(mass, wheelbase),
        tire_stiffness_front: stiffness.front,
        tire_stiffness_rear: stiffness.rear,

        steer_control_type: SteerControlType::Torque,
        steer_actuator_delay: 0.1,
        steer_rate_cost: 0.5,
        lateral_tuning: LateralTuning {
            kp: Curve::constant(0.25),
            ki: Curve::constant(0.05),
            kf: 0.00005,
        },
        longitudinal_tuning: LongitudinalTuning {
            kp: Curve::constant(0.0),
            ki: Curve::constant(0.0),
            deadzone: Curve::constant(0.0),
        },

        min_enable_speed: None,
        min_steer_speed: 0.0,

        steer_max: Curve::constant(1.0),
        gas_max: Curve::constant(1.0),
        brake_max: Curve::constant(1.0),
    }
}
