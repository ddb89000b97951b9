//! MDPS12 Checksums
//!
//! Byte 3 of MDPS12 holds a checksum over all eight bytes computed with
//! byte 3 zeroed. Depending on the steering unit it is either a plain byte
//! sum or a CRC8.

use serde::{Deserialize, Serialize};

/// Byte carrying the checksum
pub const CHECKSUM_BYTE: usize = 3;

const CRC8_POLY: u8 = 0x1D;
const CRC8_INIT: u8 = 0xFD;

/// Checksum scheme used by the steering unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecksumScheme {
    /// Not seen an MDPS12 frame yet
    Undecided,
    /// Sum of bytes mod 256
    Additive,
    /// CRC8, poly 0x1D, init 0xFD
    Crc8,
}

impl ChecksumScheme {
    /// Detect the scheme from a received frame
    pub fn detect(data: &[u8; 8]) -> Self {
        if additive_checksum(data) == data[CHECKSUM_BYTE] {
            ChecksumScheme::Additive
        } else {
            ChecksumScheme::Crc8
        }
    }

    /// Compute the checksum for `data`; undecided falls back to additive
    pub fn compute(&self, data: &[u8; 8]) -> u8 {
        match self {
            ChecksumScheme::Undecided | ChecksumScheme::Additive => additive_checksum(data),
            ChecksumScheme::Crc8 => crc8_checksum(data),
        }
    }
}

fn zeroed(data: &[u8; 8]) -> [u8; 8] {
    let mut dat = *data;
    dat[CHECKSUM_BYTE] = 0;
    dat
}

/// Byte sum with the checksum byte zeroed
pub fn additive_checksum(data: &[u8; 8]) -> u8 {
    zeroed(data).iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// CRC8 with the checksum byte zeroed
pub fn crc8_checksum(data: &[u8; 8]) -> u8 {
    let mut crc = CRC8_INIT;
    for byte in zeroed(data) {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC8_POLY
            } else {
                crc << 1
            };
        }
    }
    crc
}
