//! Forwarding Safety Hook

use crate::checksum::{ChecksumScheme, CHECKSUM_BYTE};
use crate::error::ForwardError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// LKAS11 camera command
pub const LKAS11: u32 = 832;
/// MDPS12 steering unit status
pub const MDPS12: u32 = 593;

/// Transmit count after which column torque is rewritten
const TORQUE_PATCH_AFTER: u32 = 330;
/// MDPS12 transmit counter period
const MDPS12_COUNTER_PERIOD: u32 = 345;
/// Column torque drop on the first patched frame
const COL_TORQUE_DROP: i32 = 164;
/// Column torque ramp on later patched frames
const COL_TORQUE_STEP: i32 = 34;
/// Output torque forced on patched frames
const OUT_TORQUE: u16 = 2058;
const COL_TORQUE_MASK: i32 = 0x7FF;

/// Classic 8-byte frame as seen by the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanMessage {
    pub bus: u8,
    pub address: u32,
    pub data: [u8; 8],
}

impl CanMessage {
    /// Create a message
    pub fn new(bus: u8, address: u32, data: [u8; 8]) -> Self {
        Self { bus, address, data }
    }

    /// Create a message from a slice, which must hold at least 8 bytes
    pub fn from_slice(bus: u8, address: u32, data: &[u8]) -> Result<Self, ForwardError> {
        let data: [u8; 8] = data
            .get(..8)
            .and_then(|d| d.try_into().ok())
            .ok_or(ForwardError::ShortPayload {
                address,
                len: data.len(),
            })?;
        Ok(Self { bus, address, data })
    }
}

/// Whether the hook is relaying traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardingMode {
    Undecided,
    Forwarding,
    Disabled,
}

/// Mode change reported from [`ForwardHook::on_rx`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForwardingChange {
    /// All bus callbacks enabled, relaying starts
    Enabled,
    /// Camera found on bus 0, relaying stops
    Disabled,
}

/// Forwarding safety hook state
#[derive(Debug, Clone)]
pub struct ForwardHook {
    mode: ForwardingMode,
    camera_on_bus0: bool,
    camera_bus: Option<u8>,
    giraffe_switch_2: bool,
    checksum: ChecksumScheme,
    mdps12_count: u32,
    last_col_torque: i32,
}

impl Default for ForwardHook {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardHook {
    /// Initialise the hook
    pub fn new() -> Self {
        Self {
            mode: ForwardingMode::Undecided,
            camera_on_bus0: false,
            camera_bus: None,
            giraffe_switch_2: false,
            checksum: ChecksumScheme::Undecided,
            mdps12_count: 0,
            last_col_torque: 0,
        }
    }

    pub fn mode(&self) -> ForwardingMode {
        self.mode
    }

    /// Forwarding mode only relays traffic; it never grants control
    pub fn controls_allowed(&self) -> bool {
        false
    }

    /// Bus the camera was found on, if not bus 0
    pub fn camera_bus(&self) -> Option<u8> {
        self.camera_bus
    }

    pub fn checksum_scheme(&self) -> ChecksumScheme {
        self.checksum
    }

    /// Observe a received frame
    pub fn on_rx(&mut self, msg: &CanMessage) -> Option<ForwardingChange> {
        if msg.address == LKAS11 {
            if msg.bus == 0 {
                self.camera_on_bus0 = true;
            } else {
                self.camera_bus = Some(msg.bus);
            }
            if self.camera_bus == Some(msg.bus) && !self.camera_on_bus0 {
                self.giraffe_switch_2 = true;
            }
        }

        if msg.address == MDPS12 && self.checksum == ChecksumScheme::Undecided {
            self.checksum = ChecksumScheme::detect(&msg.data);
            debug!("MDPS12 checksum scheme: {:?}", self.checksum);
        }

        if self.mode != ForwardingMode::Forwarding && !self.camera_on_bus0 && self.giraffe_switch_2
        {
            self.mode = ForwardingMode::Forwarding;
            info!("Camera on bus {:?}, forwarding enabled", self.camera_bus);
            return Some(ForwardingChange::Enabled);
        }
        if self.mode == ForwardingMode::Forwarding && self.camera_on_bus0 {
            self.mode = ForwardingMode::Disabled;
            info!("Camera detected on bus 0, forwarding disabled");
            return Some(ForwardingChange::Disabled);
        }
        None
    }

    /// Vet and patch an outgoing frame; returns whether it may be sent
    pub fn on_tx(&mut self, msg: &mut CanMessage) -> bool {
        if self.mode != ForwardingMode::Forwarding {
            return false;
        }
        if msg.address == MDPS12 {
            self.patch_mdps12(&mut msg.data);
        }
        true
    }

    /// Destination bus for a frame received on `bus`
    pub fn forward_bus(&self, bus: u8) -> Option<u8> {
        if self.mode != ForwardingMode::Forwarding {
            return None;
        }
        let camera_bus = self.camera_bus?;
        if bus == 0 {
            Some(camera_bus)
        } else if bus == camera_bus {
            Some(0)
        } else {
            None
        }
    }

    fn patch_mdps12(&mut self, data: &mut [u8; 8]) {
        if self.mdps12_count > TORQUE_PATCH_AFTER {
            let col_torque = if self.mdps12_count == TORQUE_PATCH_AFTER + 1 {
                let current = i32::from(data[0]) | (i32::from(data[1] & 0x7) << 8);
                current - COL_TORQUE_DROP
            } else {
                self.last_col_torque + COL_TORQUE_STEP
            };
            let col_torque = col_torque & COL_TORQUE_MASK;

            data[0] = (col_torque & 0xFF) as u8;
            data[1] = (data[1] & 0xF8) | ((col_torque >> 8) as u8 & 0x7);
            data[6] = (data[6] & 0x0F) | (((OUT_TORQUE & 0xF) as u8) << 4);
            data[7] = (OUT_TORQUE >> 4) as u8;
            self.last_col_torque = col_torque;
        }

        data[CHECKSUM_BYTE] = 0;
        data[CHECKSUM_BYTE] = self.checksum.compute(data);
        self.mdps12_count = (self.mdps12_count + 1) % MDPS12_COUNTER_PERIOD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::{additive_checksum, crc8_checksum};

    fn lkas(bus: u8) -> CanMessage {
        CanMessage::new(bus, LKAS11, [0; 8])
    }

    fn forwarding_hook() -> ForwardHook {
        let mut hook = ForwardHook::new();
        assert_eq!(hook.on_rx(&lkas(2)), Some(ForwardingChange::Enabled));
        hook
    }

    #[test]
    fn test_starts_idle() {
        let hook = ForwardHook::new();
        assert_eq!(hook.mode(), ForwardingMode::Undecided);
        assert!(!hook.controls_allowed());
        assert_eq!(hook.forward_bus(0), None);
    }

    #[test]
    fn test_camera_on_other_bus_enables_forwarding() {
        let hook = forwarding_hook();
        assert_eq!(hook.mode(), ForwardingMode::Forwarding);
        assert_eq!(hook.camera_bus(), Some(2));
        assert_eq!(hook.forward_bus(0), Some(2));
        assert_eq!(hook.forward_bus(2), Some(0));
        assert_eq!(hook.forward_bus(1), None);
    }

    #[test]
    fn test_enable_reported_once() {
        let mut hook = forwarding_hook();
        assert_eq!(hook.on_rx(&lkas(2)), None);
    }

    #[test]
    fn test_camera_on_bus0_disables_forwarding() {
        let mut hook = forwarding_hook();
        assert_eq!(hook.on_rx(&lkas(0)), Some(ForwardingChange::Disabled));
        assert_eq!(hook.mode(), ForwardingMode::Disabled);
        assert_eq!(hook.forward_bus(0), None);
        // Never re-enabled once the camera has been seen on bus 0
        assert_eq!(hook.on_rx(&lkas(2)), None);
    }

    #[test]
    fn test_camera_on_bus0_first_never_forwards() {
        let mut hook = ForwardHook::new();
        assert_eq!(hook.on_rx(&lkas(0)), None);
        assert_eq!(hook.on_rx(&lkas(2)), None);
        assert_eq!(hook.mode(), ForwardingMode::Undecided);
    }

    #[test]
    fn test_tx_blocked_unless_forwarding() {
        let mut hook = ForwardHook::new();
        let mut msg = CanMessage::new(0, MDPS12, [0; 8]);
        assert!(!hook.on_tx(&mut msg));
        assert_eq!(msg.data, [0; 8]);
    }

    #[test]
    fn test_checksum_scheme_detected_once() {
        let mut hook = ForwardHook::new();
        let mut data = [1, 2, 3, 0, 4, 5, 6, 7];
        data[3] = additive_checksum(&data).wrapping_add(9);
        hook.on_rx(&CanMessage::new(0, MDPS12, data));
        assert_eq!(hook.checksum_scheme(), ChecksumScheme::Crc8);

        data[3] = additive_checksum(&data);
        hook.on_rx(&CanMessage::new(0, MDPS12, data));
        assert_eq!(hook.checksum_scheme(), ChecksumScheme::Crc8);
    }

    #[test]
    fn test_tx_rewrites_checksum() {
        let mut hook = forwarding_hook();
        let mut data = [9, 8, 7, 0, 6, 5, 4, 3];
        data[3] = additive_checksum(&data);
        hook.on_rx(&CanMessage::new(0, MDPS12, data));

        let mut msg = CanMessage::new(0, MDPS12, [1, 1, 1, 0xAA, 1, 1, 1, 1]);
        assert!(hook.on_tx(&mut msg));
        assert_eq!(msg.data[3], 7);
    }

    #[test]
    fn test_tx_crc8_checksum() {
        let mut hook = forwarding_hook();
        hook.on_rx(&CanMessage::new(0, MDPS12, [1, 0, 0, 0x55, 0, 0, 0, 0]));
        assert_eq!(hook.checksum_scheme(), ChecksumScheme::Crc8);

        let mut msg = CanMessage::new(0, MDPS12, [1, 2, 3, 0, 4, 5, 6, 7]);
        hook.on_tx(&mut msg);
        assert_eq!(msg.data[3], crc8_checksum(&[1, 2, 3, 0, 4, 5, 6, 7]));
    }

    #[test]
    fn test_torque_patch_window() {
        let mut hook = forwarding_hook();
        // Column torque 500 = 0x1F4
        let original = [0xF4, 0x01, 0, 0, 0, 0, 0x05, 0x00];

        for _ in 0..=TORQUE_PATCH_AFTER {
            let mut msg = CanMessage::new(0, MDPS12, original);
            hook.on_tx(&mut msg);
            assert_eq!(msg.data[0], 0xF4);
            assert_eq!(msg.data[7], 0x00);
        }

        // Count 331: dropped by 164
        let mut msg = CanMessage::new(0, MDPS12, original);
        hook.on_tx(&mut msg);
        let col = u16::from(msg.data[0]) | (u16::from(msg.data[1] & 0x7) << 8);
        assert_eq!(col, 500 - 164);
        let out = u16::from(msg.data[6] >> 4) | (u16::from(msg.data[7]) << 4);
        assert_eq!(out, OUT_TORQUE);
        assert_eq!(msg.data[6] & 0x0F, 0x05);

        // Count 332: ramps from the last value
        let mut msg = CanMessage::new(0, MDPS12, original);
        hook.on_tx(&mut msg);
        let col = u16::from(msg.data[0]) | (u16::from(msg.data[1] & 0x7) << 8);
        assert_eq!(col, 500 - 164 + 34);
    }

    #[test]
    fn test_counter_wraps() {
        let mut hook = forwarding_hook();
        let original = [0xF4, 0x01, 0, 0, 0, 0, 0, 0];
        for _ in 0..MDPS12_COUNTER_PERIOD {
            let mut msg = CanMessage::new(0, MDPS12, original);
            hook.on_tx(&mut msg);
        }
        let mut msg = CanMessage::new(0, MDPS12, original);
        hook.on_tx(&mut msg);
        assert_eq!(msg.data[0], 0xF4);
    }

    #[test]
    fn test_from_slice() {
        let msg = CanMessage::from_slice(1, MDPS12, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(msg.data, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(
            CanMessage::from_slice(1, MDPS12, &[1, 2]),
            Err(ForwardError::ShortPayload {
                address: MDPS12,
                len: 2
            })
        );
    }
}
