//! Melody wire format.
//!
//! A melody is a flat byte sequence of repeating pairs:
//! ```text
//! Byte 0: tone (raw `Tone` value; 0 = silence)
//! Byte 1: duration in 25 ms ticks
//! ...repeating, up to MELODY_CAPACITY_BYTES
//! ```
//! This layout is a fixed binary contract; melodies stored in flash or
//! received over the air decode with `Note::from_bytes` pair by pair.

use crate::buzzer::tone::Tone;
use crate::config::TICK_MS;

/// Encoded size of one note in bytes.
pub const NOTE_SIZE: usize = 2;

/// One decoded (tone, duration) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub tone: Tone,
    /// Duration in `TICK_MS` units.
    pub ticks: u8,
}

impl Note {
    /// Decode the pair at the front of `data`.
    ///
    /// Needs at least two bytes; extra bytes are ignored, so this can be
    /// pointed at any even cursor inside a melody buffer. A tone byte
    /// outside the defined range decodes as silence - the duration is
    /// honored, the pitch saturates. Callers that want strict validation
    /// use `Tone::try_from` before encoding.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < NOTE_SIZE {
            return None;
        }
        Some(Self {
            tone: Tone::from_raw(data[0]).unwrap_or(Tone::Silence),
            ticks: data[1],
        })
    }

    /// Serialise into a byte slice.
    /// Returns the number of bytes written (always 2), or 0 if `buf` is
    /// too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < NOTE_SIZE {
            return 0;
        }
        buf[0] = self.tone as u8;
        buf[1] = self.ticks;
        NOTE_SIZE
    }

    /// Note duration in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        self.ticks as u32 * TICK_MS
    }
}
