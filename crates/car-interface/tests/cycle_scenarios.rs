use actuation::{
    ActuationForwarder, Actuators, AudibleAlert, CanFrame, CarControl, CarController, HudAlert,
    HudControl, VisualAlert,
};
use car_interface::{CarInterface, CarStateOutput};
use car_profile::{resolve_profile, CarModel};
use car_state::{BuilderConfig, BusSignals, BusSnapshot, CarState, GearShifter};
use proptest::prelude::*;
use safety_events::{ButtonEvent, ButtonType, Event, PreviousFrame};
use thiserror::Error;

fn interface() -> CarInterface {
    CarInterface::new(
        resolve_profile(CarModel::SantaFe, "KM8J3CA46KU000001"),
        BuilderConfig::default(),
    )
}

/// Every gate clear: doors shut, belt on, all gear sources in drive, main on
fn clear_signals() -> BusSignals {
    BusSignals {
        v_ego: 20.0,
        v_ego_raw: 20.0,
        door_all_closed: true,
        seatbelt: true,
        main_on: true,
        gear_shifter: GearShifter::Drive,
        gear_tcu: GearShifter::Drive,
        gear_shifter_cluster: GearShifter::Drive,
        ..Default::default()
    }
}

fn cruise_on(mut signals: BusSignals) -> BusSignals {
    signals.pcm_acc_status = 1;
    signals.cruise_set_speed = 25.0;
    signals
}

fn run(interface: &mut CarInterface, signals: BusSignals) -> CarStateOutput {
    interface.update(&BusSnapshot::valid(signals))
}

#[test]
fn scenario_a_door_open_with_cruise_off() {
    let mut ci = interface();
    run(&mut ci, clear_signals());

    let mut signals = clear_signals();
    signals.door_all_closed = false;
    let out = run(&mut ci, signals);

    assert_eq!(out.events.events, vec![Event::DoorOpen, Event::PcmDisable]);
    assert!(!ci.latch().cruise_enabled);
}

#[test]
fn scenario_b_cruise_rising_edge() {
    let mut ci = interface();
    run(&mut ci, clear_signals());

    let out = run(&mut ci, cruise_on(clear_signals()));
    assert_eq!(out.events.events, vec![Event::PcmEnable]);
    assert!(ci.latch().cruise_enabled);
    assert_eq!(out.car_state.cruise_state.speed, 25.0);
}

#[test]
fn scenario_c_steady_cruise_with_pedal_noise_is_silent() {
    let mut ci = interface();
    run(&mut ci, cruise_on(clear_signals()));

    let mut signals = cruise_on(clear_signals());
    signals.gas_pedal = 0.0005;
    let out = run(&mut ci, signals);

    assert!(out.events.events.is_empty());
    assert!(out.events.button_events.is_empty());
    assert!(!out.car_state.gas_pressed);
}

#[test]
fn scenario_d_reverse_from_primary_shifter() {
    // The resolved category follows the primary shifter into reverse while
    // the other two sources still read drive. That disagreement alone means
    // "not drive", so wrongGear accompanies reverseGear on a decoded snapshot.
    let mut ci = interface();
    run(&mut ci, cruise_on(clear_signals()));

    let mut signals = cruise_on(clear_signals());
    signals.gear_shifter = GearShifter::Reverse;
    let out = run(&mut ci, signals);

    assert_eq!(out.car_state.gear_shifter, GearShifter::Reverse);
    assert_eq!(out.events.events, vec![Event::WrongGear, Event::ReverseGear]);
}

#[test]
fn pcm_disable_on_first_cycle() {
    let mut ci = interface();
    let out = run(&mut ci, clear_signals());
    assert_eq!(out.events.events, vec![Event::PcmDisable]);
}

#[test]
fn invalid_camera_bus_degrades_but_completes_cycle() {
    let mut ci = interface();
    let mut snapshot = BusSnapshot::valid(cruise_on(clear_signals()));
    snapshot.camera.valid = false;

    let out = ci.update(&snapshot);
    assert!(!out.car_state.can_valid);
    assert_eq!(out.events.events, vec![Event::PcmEnable]);
    assert_eq!(ci.cycles(), 1);
}

#[test]
fn camera_signals_retained() {
    let mut ci = interface();
    let mut snapshot = BusSnapshot::valid(clear_signals());
    snapshot.camera.lanes = 2;
    snapshot.camera.lkas_request = true;
    ci.update(&snapshot);

    assert_eq!(ci.lanes(), 2);
    assert!(ci.lkas_request());
}

#[test]
fn blinker_sequence() {
    let mut ci = interface();
    run(&mut ci, cruise_on(clear_signals()));

    let mut signals = cruise_on(clear_signals());
    signals.right_blinker_on = true;
    let out = run(&mut ci, signals.clone());
    assert_eq!(
        out.events.button_events,
        vec![ButtonEvent {
            kind: ButtonType::RightBlinker,
            pressed: true
        }]
    );

    assert!(run(&mut ci, signals.clone()).events.button_events.is_empty());

    signals.right_blinker_on = false;
    let out = run(&mut ci, signals);
    assert_eq!(
        out.events.button_events,
        vec![ButtonEvent {
            kind: ButtonType::RightBlinker,
            pressed: false
        }]
    );
}

#[test]
fn output_serializes_with_event_names() {
    let mut ci = interface();
    let mut signals = clear_signals();
    signals.left_blinker_on = true;
    let out = run(&mut ci, signals);

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["events"], serde_json::json!(["pcmDisable"]));
    assert_eq!(
        json["buttonEvents"],
        serde_json::json!([{"type": "leftBlinker", "pressed": true}])
    );
    assert_eq!(json["carState"]["canValid"], serde_json::json!(true));
}

#[derive(Debug, Error)]
#[error("LKAS encoder fault")]
struct LkasFault;

struct StubController {
    fail: bool,
    seen: Vec<(f64, HudAlert)>,
}

impl CarController for StubController {
    type Error = LkasFault;

    fn update(
        &mut self,
        enabled: bool,
        state: &CarState,
        actuators: &Actuators,
        _pcm_cancel: bool,
        hud_alert: HudAlert,
    ) -> Result<Vec<CanFrame>, Self::Error> {
        if self.fail {
            return Err(LkasFault);
        }
        self.seen.push((state.v_ego, hud_alert));
        Ok(vec![CanFrame::new(0x340, vec![enabled as u8], 0)])
    }
}

#[test]
fn apply_uses_latest_state() {
    let mut ci = interface();
    run(&mut ci, cruise_on(clear_signals()));

    let mut forwarder = ActuationForwarder::new(StubController {
        fail: false,
        seen: Vec::new(),
    });
    let control = CarControl {
        enabled: true,
        hud_control: HudControl {
            visual_alert: VisualAlert::SteerRequired,
            audible_alert: AudibleAlert::None,
        },
        ..Default::default()
    };

    let frames = ci.apply(&mut forwarder, &control).unwrap();
    assert_eq!(frames, vec![CanFrame::new(0x340, vec![1], 0)]);
    assert_eq!(
        forwarder.controller().seen,
        vec![(20.0, HudAlert::STEER_REQUIRED)]
    );
}

#[test]
fn apply_propagates_encoder_failure() {
    let ci = interface();
    let mut forwarder = ActuationForwarder::new(StubController {
        fail: true,
        seen: Vec::new(),
    });
    assert!(matches!(
        ci.apply(&mut forwarder, &CarControl::default()),
        Err(LkasFault)
    ));
}

proptest! {
    #[test]
    fn latch_tracks_every_cycle(cycles in prop::collection::vec(any::<[bool; 5]>(), 1..20)) {
        let mut ci = interface();
        for b in cycles {
            let mut signals = clear_signals();
            signals.gas_pedal = if b[0] { 0.2 } else { 0.0 };
            signals.brake_pressed = b[1];
            signals.pcm_acc_status = u8::from(b[2]);
            signals.left_blinker_on = b[3];
            signals.right_blinker_on = b[4];

            let before = *ci.latch();
            let out = run(&mut ci, signals);

            prop_assert_eq!(*ci.latch(), PreviousFrame::from_state(&out.car_state));
            prop_assert_eq!(
                out.events.events.contains(&Event::PcmEnable),
                b[2] && !before.cruise_enabled
            );
            prop_assert_eq!(out.events.events.contains(&Event::PedalPressed), b[0]);
        }
    }
}
