//! Vehicle State Normalization
//!
//! Maps one cycle's decoded bus readings into an immutable, canonical
//! [`CarState`]. The builder is a pure function of its input: it keeps no
//! history and never fails. Bad input shows up as `can_valid == false`.

mod builder;
mod bus;
mod gear;
mod state;

pub use builder::{BuilderConfig, CarStateBuilder, GAS_PRESSED_EPSILON};
pub use bus::{BusSignals, BusSnapshot, CameraReading, PrimaryReading};
pub use gear::{GearShifter, GearSources};
pub use state::{CarState, CruiseState, WheelSpeeds};
