//! Outbound Bus Frames

use serde::{Deserialize, Serialize};

/// Frame to transmit, opaque to this crate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanFrame {
    /// Arbitration ID
    pub address: u32,
    pub data: Vec<u8>,
    /// Destination bus
    pub bus: u8,
}

impl CanFrame {
    /// Create a new frame
    pub fn new(address: u32, data: Vec<u8>, bus: u8) -> Self {
        Self { address, data, bus }
    }
}
