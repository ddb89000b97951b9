//! Actuation Forwarding
//!
//! Hands the controller's desired actuator values to the external encoder
//! that turns them into outbound bus frames. This crate owns no state and
//! does not retry; encoder failures reach the caller untouched.

mod control;
mod forwarder;
mod frame;
mod hud;

pub use control::{Actuators, AudibleAlert, CarControl, CruiseControl, HudControl, VisualAlert};
pub use forwarder::{ActuationForwarder, CarController};
pub use frame::CanFrame;
pub use hud::{hud_alert, HudAlert};
