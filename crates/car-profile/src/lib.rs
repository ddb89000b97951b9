//! Vehicle Profile
//!
//! Immutable per-model constants (mass, geometry, control gains, actuator
//! limits, capability flags) resolved once per driving session from a model
//! identifier.

mod curve;
mod error;
mod model;
mod profile;
mod scaling;

pub use curve::Curve;
pub use error::ProfileError;
pub use model::CarModel;
pub use profile::{
    resolve_profile, LateralTuning, LongitudinalTuning, SafetyModel, SteerControlType,
    VehicleProfile,
};
pub use scaling::{scale_rot_inertia, scale_tire_stiffness, TireStiffness, STD_CARGO_KG};
