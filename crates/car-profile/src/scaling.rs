//! Mass and Geometry Scaling
//!
//! Rotational inertia and tire cornering stiffness are not measured per model;
//! they are scaled from a well-characterised reference car by mass and
//! axle geometry.

use serde::{Deserialize, Serialize};

/// Standard extra cargo (kg) added to curb weight
pub const STD_CARGO_KG: f64 = 136.0;

const LB_TO_KG: f64 = 0.453592;

// Reference car
const REF_MASS: f64 = 2923.0 * LB_TO_KG + STD_CARGO_KG;
const REF_WHEELBASE: f64 = 2.70;
const REF_CENTER_TO_FRONT: f64 = REF_WHEELBASE * 0.4;
const REF_CENTER_TO_REAR: f64 = REF_WHEELBASE - REF_CENTER_TO_FRONT;
const REF_ROT_INERTIA: f64 = 2500.0;
const REF_TIRE_STIFFNESS_FRONT: f64 = 192150.0;
const REF_TIRE_STIFFNESS_REAR: f64 = 202500.0;

/// Front/rear tire cornering stiffness (N/rad)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TireStiffness {
    pub front: f64,
    pub rear: f64,
}

/// Scale yaw rotational inertia (kg*m^2) by mass and wheelbase squared
pub fn scale_rot_inertia(mass: f64, wheelbase: f64) -> f64 {
    REF_ROT_INERTIA * mass * wheelbase.powi(2) / (REF_MASS * REF_WHEELBASE.powi(2))
}

/// Scale tire stiffness by mass and the load split between the axles
pub fn scale_tire_stiffness(
    mass: f64,
    wheelbase: f64,
    center_to_front: f64,
    tire_stiffness_factor: f64,
) -> TireStiffness {
    let center_to_rear = wheelbase - center_to_front;
    let front = (REF_TIRE_STIFFNESS_FRONT * tire_stiffness_factor) * mass / REF_MASS
        * (center_to_rear / wheelbase)
        / (REF_CENTER_TO_REAR / REF_WHEELBASE);
    let rear = (REF_TIRE_STIFFNESS_REAR * tire_stiffness_factor) * mass / REF_MASS
        * (center_to_front / wheelbase)
        / (REF_CENTER_TO_FRONT / REF_WHEELBASE);
    TireStiffness { front, rear }
}
