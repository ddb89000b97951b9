//! Safety Event Engine

use crate::event::{ButtonEvent, ButtonType, Event};
use crate::latch::PreviousFrame;
use car_state::{CarState, GearShifter};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Events produced by one cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleEvents {
    /// Safety events in rule order
    pub events: Vec<Event>,
    /// Blinker edges, left before right
    pub button_events: Vec<ButtonEvent>,
}

impl CycleEvents {
    /// Whether `event` fired this cycle
    pub fn contains(&self, event: Event) -> bool {
        self.events.contains(&event)
    }
}

/// Evaluate one cycle against `latch` and return the events together with
/// the latch for the next cycle.
///
/// Rule order is emission order, not priority. Every rule except the cruise
/// transition is level-triggered and repeats for as long as its condition
/// holds.
pub fn evaluate(state: &CarState, latch: &PreviousFrame) -> (CycleEvents, PreviousFrame) {
    let mut events = Vec::new();

    // Drive needs all three gear sources to agree
    if !state.gear_sources.all_drive() {
        events.push(Event::WrongGear);
    }
    if state.door_open {
        events.push(Event::DoorOpen);
    }
    if state.seatbelt_unlatched {
        events.push(Event::SeatbeltNotLatched);
    }
    if state.esp_disabled {
        events.push(Event::EspDisabled);
    }
    if !state.cruise_state.available {
        events.push(Event::WrongCarMode);
    }
    // Resolved category only; not re-checked against the raw sources
    if state.gear_shifter == GearShifter::Reverse {
        events.push(Event::ReverseGear);
    }
    if state.steer_fault {
        events.push(Event::SteerTempUnavailable);
    }

    // Rising edge enables; steady engagement is silent
    if state.cruise_state.enabled && !latch.cruise_enabled {
        events.push(Event::PcmEnable);
    } else if !state.cruise_state.enabled {
        events.push(Event::PcmDisable);
    }

    if state.gas_pressed {
        events.push(Event::PedalPressed);
    }
    if state.low_speed_alert {
        events.push(Event::BelowSteerSpeed);
    }

    let mut button_events = Vec::new();
    if state.left_blinker != latch.left_blinker {
        button_events.push(ButtonEvent {
            kind: ButtonType::LeftBlinker,
            pressed: state.left_blinker,
        });
    }
    if state.right_blinker != latch.right_blinker {
        button_events.push(ButtonEvent {
            kind: ButtonType::RightBlinker,
            pressed: state.right_blinker,
        });
    }

    (
        CycleEvents {
            events,
            button_events,
        },
        PreviousFrame::from_state(state),
    )
}

/// Session-scoped engine owning the previous-frame latch
#[derive(Debug, Default)]
pub struct SafetyEventEngine {
    latch: PreviousFrame,
}

impl SafetyEventEngine {
    /// Create an engine for a new session
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch as of the last processed cycle
    pub fn latch(&self) -> &PreviousFrame {
        &self.latch
    }

    /// Derive this cycle's events and commit the latch
    pub fn process(&mut self, state: &CarState) -> CycleEvents {
        let (events, next) = evaluate(state, &self.latch);
        self.latch = next;

        debug!(
            events = ?events.events,
            buttons = events.button_events.len(),
            "derived cycle events"
        );
        events
    }
}
