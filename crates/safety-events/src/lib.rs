//! Safety Event Derivation
//!
//! Evaluates a fixed, ordered rule set over each cycle's [`CarState`] and
//! reports which conditions block engagement, force a disengage, request
//! engagement or merely warn. Edge-triggered rules compare against a small
//! latch of the previous cycle's flags.
//!
//! [`CarState`]: car_state::CarState

mod engine;
mod event;
mod latch;

pub use engine::{evaluate, CycleEvents, SafetyEventEngine};
pub use event::{ButtonEvent, ButtonType, Event, EventType};
pub use latch::PreviousFrame;
