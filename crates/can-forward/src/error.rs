//! Forwarding Error Types

use thiserror::Error;

/// Errors building frames for the forwarding hook
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// Payload shorter than a classic 8-byte frame
    #[error("Frame 0x{address:03X} has {len} data bytes, expected 8")]
    ShortPayload { address: u32, len: usize },
}
