//! Event Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tag carried by a safety event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Blocks new engagement while the condition holds
    NoEntry,
    /// Graceful disengage if engaged
    SoftDisable,
    /// Hard disengage
    ImmediateDisable,
    /// Disengage attributable to the driver
    UserDisable,
    /// Rising-edge request to engage
    Enable,
    /// Informational, non-blocking
    Warning,
    /// Relevant only before engagement
    PreEnable,
}

/// Safety/control event emitted for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Event {
    WrongGear,
    DoorOpen,
    SeatbeltNotLatched,
    EspDisabled,
    WrongCarMode,
    ReverseGear,
    SteerTempUnavailable,
    PcmEnable,
    PcmDisable,
    PedalPressed,
    BelowSteerSpeed,
}

impl Event {
    /// Classification tags; never empty
    pub fn types(&self) -> &'static [EventType] {
        use EventType::*;
        match self {
            Event::WrongGear => &[NoEntry, SoftDisable],
            Event::DoorOpen => &[NoEntry, SoftDisable],
            Event::SeatbeltNotLatched => &[NoEntry, SoftDisable],
            Event::EspDisabled => &[NoEntry, SoftDisable],
            Event::WrongCarMode => &[NoEntry, UserDisable],
            Event::ReverseGear => &[NoEntry, ImmediateDisable],
            Event::SteerTempUnavailable => &[NoEntry, Warning],
            Event::PcmEnable => &[Enable],
            Event::PcmDisable => &[UserDisable],
            Event::PedalPressed => &[PreEnable],
            Event::BelowSteerSpeed => &[Warning],
        }
    }

    /// Whether this event carries `ty`
    pub fn has(&self, ty: EventType) -> bool {
        self.types().contains(&ty)
    }

    /// Event name as reported downstream
    pub fn name(&self) -> &'static str {
        match self {
            Event::WrongGear => "wrongGear",
            Event::DoorOpen => "doorOpen",
            Event::SeatbeltNotLatched => "seatbeltNotLatched",
            Event::EspDisabled => "espDisabled",
            Event::WrongCarMode => "wrongCarMode",
            Event::ReverseGear => "reverseGear",
            Event::SteerTempUnavailable => "steerTempUnavailable",
            Event::PcmEnable => "pcmEnable",
            Event::PcmDisable => "pcmDisable",
            Event::PedalPressed => "pedalPressed",
            Event::BelowSteerSpeed => "belowSteerSpeed",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Button that produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonType {
    LeftBlinker,
    RightBlinker,
}

/// Button state change since the previous cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEvent {
    #[serde(rename = "type")]
    pub kind: ButtonType,
    /// New state
    pub pressed: bool,
}
