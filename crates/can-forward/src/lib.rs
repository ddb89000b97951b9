//! Camera-Bus Forwarding
//!
//! Safety hook for interceptor hardware sitting between the vehicle bus and
//! the LKAS camera. When the camera is found on a bus other than bus 0 the
//! hook relays traffic in both directions and patches MDPS12 steering
//! frames on the way out.

mod checksum;
mod error;
mod hook;

pub use checksum::{additive_checksum, crc8_checksum, ChecksumScheme};
pub use error::ForwardError;
pub use hook::{CanMessage, ForwardHook, ForwardingChange, ForwardingMode, LKAS11, MDPS12};
