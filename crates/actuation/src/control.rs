//! Desired Control Commands

use serde::{Deserialize, Serialize};

/// Desired actuator targets for one cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actuators {
    /// Throttle (0..1)
    pub gas: f64,
    /// Brake (0..1)
    pub brake: f64,
    /// Steering torque request (-1..1)
    pub steer: f64,
    /// Steering angle request (deg)
    pub steer_angle: f64,
}

/// Visual alert requested by the alert manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualAlert {
    #[default]
    None,
    Fcw,
    SteerRequired,
    BrakePressed,
    WrongGear,
    SeatbeltUnbuckled,
    SpeedTooHigh,
}

/// Audible alert requested by the alert manager
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudibleAlert {
    #[default]
    None,
    ChimeEngage,
    ChimeDisengage,
    ChimeError,
    ChimeWarning1,
    ChimeWarning2,
    ChimeWarningRepeat,
    ChimePrompt,
}

/// HUD request: the visual/audible alert pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HudControl {
    pub visual_alert: VisualAlert,
    pub audible_alert: AudibleAlert,
}

/// Cruise-related requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CruiseControl {
    /// Ask the stock cruise to cancel
    pub cancel: bool,
}

/// Everything the controller asks of the car for one cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarControl {
    /// Overall engagement flag
    pub enabled: bool,
    pub actuators: Actuators,
    pub cruise_control: CruiseControl,
    pub hud_control: HudControl,
}
