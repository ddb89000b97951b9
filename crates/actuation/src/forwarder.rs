//! Actuation Forwarder

use crate::control::{Actuators, CarControl};
use crate::frame::CanFrame;
use crate::hud::{hud_alert, HudAlert};
use car_state::CarState;
use tracing::trace;

/// Vehicle-specific encoder turning desired actuation into bus frames
pub trait CarController {
    /// Encoder failure, surfaced to the caller as-is
    type Error: std::error::Error;

    /// Encode one cycle's command
    fn update(
        &mut self,
        enabled: bool,
        state: &CarState,
        actuators: &Actuators,
        pcm_cancel: bool,
        hud_alert: HudAlert,
    ) -> Result<Vec<CanFrame>, Self::Error>;
}

/// Stateless pass-through to a [`CarController`]
#[derive(Debug)]
pub struct ActuationForwarder<C> {
    controller: C,
}

impl<C: CarController> ActuationForwarder<C> {
    /// Wrap an encoder
    pub fn new(controller: C) -> Self {
        Self { controller }
    }

    /// The wrapped encoder
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Encode `control` against the current `state`.
    ///
    /// The HUD alert pair is classified first; everything else is passed
    /// through. No retry is attempted.
    pub fn apply(
        &mut self,
        control: &CarControl,
        state: &CarState,
    ) -> Result<Vec<CanFrame>, C::Error> {
        let hud = hud_alert(
            control.hud_control.visual_alert,
            control.hud_control.audible_alert,
        );
        trace!(enabled = control.enabled, hud = hud.code(), "forwarding actuation");

        self.controller.update(
            control.enabled,
            state,
            &control.actuators,
            control.cruise_control.cancel,
            hud,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{AudibleAlert, CruiseControl, HudControl, VisualAlert};
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("encoder rejected command: {0}")]
    struct EncoderError(&'static str);

    #[derive(Default)]
    struct RecordingController {
        calls: Vec<(bool, bool, HudAlert, f64)>,
        fail: bool,
    }

    impl CarController for RecordingController {
        type Error = EncoderError;

        fn update(
            &mut self,
            enabled: bool,
            state: &CarState,
            actuators: &Actuators,
            pcm_cancel: bool,
            hud_alert: HudAlert,
        ) -> Result<Vec<CanFrame>, Self::Error> {
            if self.fail {
                return Err(EncoderError("checksum unavailable"));
            }
            self.calls.push((enabled, pcm_cancel, hud_alert, actuators.steer));
            Ok(vec![CanFrame::new(
                0x340,
                vec![state.v_ego as u8, (actuators.steer * 100.0) as u8],
                0,
            )])
        }
    }

    #[test]
    fn test_forwards_command() {
        let mut forwarder = ActuationForwarder::new(RecordingController::default());
        let control = CarControl {
            enabled: true,
            actuators: Actuators {
                steer: 0.5,
                ..Default::default()
            },
            cruise_control: CruiseControl { cancel: true },
            hud_control: HudControl {
                visual_alert: VisualAlert::SteerRequired,
                audible_alert: AudibleAlert::ChimeWarning1,
            },
        };
        let state = CarState {
            v_ego: 20.0,
            ..Default::default()
        };

        let frames = forwarder.apply(&control, &state).unwrap();
        assert_eq!(frames, vec![CanFrame::new(0x340, vec![20, 50], 0)]);
        assert_eq!(
            forwarder.controller().calls,
            vec![(true, true, HudAlert::STEER_REQUIRED_AUDIBLE, 0.5)]
        );
    }

    #[test]
    fn test_encoder_error_propagates_unchanged() {
        let mut forwarder = ActuationForwarder::new(RecordingController {
            fail: true,
            ..Default::default()
        });
        let err = forwarder
            .apply(&CarControl::default(), &CarState::default())
            .unwrap_err();
        assert_eq!(err, EncoderError("checksum unavailable"));
    }
}
