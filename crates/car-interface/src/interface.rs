//! Per-Cycle Orchestrator

use actuation::{ActuationForwarder, CanFrame, CarControl, CarController};
use car_profile::VehicleProfile;
use car_state::{BuilderConfig, BusSnapshot, CarState, CarStateBuilder};
use metrics::counter;
use safety_events::{CycleEvents, PreviousFrame, SafetyEventEngine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// What one cycle delivers to the control loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarStateOutput {
    pub car_state: CarState,
    #[serde(flatten)]
    pub events: CycleEvents,
}

/// Session-scoped car interface
pub struct CarInterface {
    profile: VehicleProfile,
    builder: CarStateBuilder,
    engine: SafetyEventEngine,
    /// Most recent snapshot, handed to actuation
    state: CarState,
    /// Latest lane count from the camera bus
    lanes: u8,
    /// Latest LKAS request from the camera bus
    lkas_request: bool,
    cycles: u64,
}

impl CarInterface {
    /// Start a session for `profile`
    pub fn new(profile: VehicleProfile, builder_config: BuilderConfig) -> Self {
        info!(
            "Starting car interface session for {} (VIN {:?})",
            profile.car_fingerprint, profile.car_vin
        );
        Self {
            profile,
            builder: CarStateBuilder::new(builder_config),
            engine: SafetyEventEngine::new(),
            state: CarState::default(),
            lanes: 0,
            lkas_request: false,
            cycles: 0,
        }
    }

    /// Run one cycle
    pub fn update(&mut self, snapshot: &BusSnapshot) -> CarStateOutput {
        let car_state = self.builder.build(snapshot);

        if !car_state.can_valid && (self.cycles == 0 || self.state.can_valid) {
            warn!(
                primary = snapshot.primary.valid,
                consistent = snapshot.primary.consistent,
                camera = snapshot.camera.valid,
                "bus data invalid"
            );
        }

        self.lanes = snapshot.camera.lanes;
        self.lkas_request = snapshot.camera.lkas_request;

        let events = self.engine.process(&car_state);

        self.cycles += 1;
        counter!("car_interface_cycles_total").increment(1);
        if !car_state.can_valid {
            counter!("car_interface_invalid_cycles_total").increment(1);
        }
        for event in &events.events {
            counter!("car_interface_events_total", "event" => event.name()).increment(1);
        }
        debug!(cycle = self.cycles, events = events.events.len(), "cycle complete");

        self.state = car_state.clone();
        CarStateOutput { car_state, events }
    }

    /// Encode actuation against the most recent snapshot
    pub fn apply<C: CarController>(
        &self,
        forwarder: &mut ActuationForwarder<C>,
        control: &CarControl,
    ) -> Result<Vec<CanFrame>, C::Error> {
        forwarder.apply(control, &self.state)
    }

    pub fn profile(&self) -> &VehicleProfile {
        &self.profile
    }

    /// Most recent snapshot; default before the first cycle
    pub fn state(&self) -> &CarState {
        &self.state
    }

    pub fn latch(&self) -> &PreviousFrame {
        self.engine.latch()
    }

    pub fn lanes(&self) -> u8 {
        self.lanes
    }

    pub fn lkas_request(&self) -> bool {
        self.lkas_request
    }

    /// Cycles processed this session
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
