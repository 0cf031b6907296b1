//! Byte patterns burned into the two ROM images.
//!
//! Every byte is a pure function of its address, so either image can be
//! computed independently, in any order, without touching the filesystem.
//!
//! - **MSB**: a single set bit sweeping bit 0 → bit 7 → bit 0 every 16 bytes
//!   (the "Knight-Rider" effect when wired to LEDs).
//! - **LSB**: a counter `0x00..=0xff` that wraps every 256 bytes.

use crate::config::{LSB_FILE_NAME, MSB_FILE_NAME};

/// Length of one full sweep (up and back down).
pub const SWEEP_PERIOD: usize = 16;

/// Bit position lit at address `i`.
///
/// Walks `0, 1, .., 7, 7, 6, .., 0` as `i % 16` goes `0..16`.
#[inline]
pub fn knight_rider_position(i: usize) -> u32 {
    let p = (i % SWEEP_PERIOD) as u32;
    if p <= 7 {
        p
    } else {
        15 - p
    }
}

/// MSB image byte at address `i`.
#[inline]
pub fn msb_byte(i: usize) -> u8 {
    1u8 << knight_rider_position(i)
}

/// LSB image byte at address `i`.
#[inline]
pub fn lsb_byte(i: usize) -> u8 {
    (i % 256) as u8
}

/// Which of the two images to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomPattern {
    /// Knight-Rider sweep for the high byte.
    Msb,
    /// Wrapping counter for the low byte.
    Lsb,
}

impl RomPattern {
    /// Byte at address `i`.
    #[inline]
    pub fn byte(self, i: usize) -> u8 {
        match self {
            Self::Msb => msb_byte(i),
            Self::Lsb => lsb_byte(i),
        }
    }

    /// Default output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Msb => MSB_FILE_NAME,
            Self::Lsb => LSB_FILE_NAME,
        }
    }

    /// Bytes for addresses `0..len`.
    pub fn bytes(self, len: usize) -> impl Iterator<Item = u8> {
        (0..len).map(move |i| self.byte(i))
    }

    /// Full image of `len` bytes.
    pub fn image(self, len: usize) -> Vec<u8> {
        self.bytes(len).collect()
    }
}
