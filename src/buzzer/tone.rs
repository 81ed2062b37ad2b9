//! Tone table - maps abstract pitches to timer settings.
//!
//! The buzzer is driven by an 8-bit compare register behind a clock
//! prescaler. To cover two-plus octaves with one register width, tones
//! are split into three bands of seven diatonic pitches (B, C, D, E, F,
//! G, A); each band reuses the same seven reload constants and only the
//! prescaler changes, so tones seven steps apart share a reload value
//! one divider class apart.
//!
//! The reload constants were hand-fitted against the hardware rather
//! than derived by halving periods, so consecutive bands are close to -
//! but not exactly - one octave apart. That is a property of the
//! tuning, not a bug.

use crate::error::InvalidTone;

/// Enumerated pitch identifier, including the silence sentinel.
///
/// Raw values `1..=6` (C4..A4) sit below the lowest reachable band and
/// are intentionally absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Tone {
    /// No output; the pin idles as plain GPIO.
    Silence = 0,
    B4 = 7,
    C5 = 8,
    D5 = 9,
    E5 = 10,
    F5 = 11,
    G5 = 12,
    A5 = 13,
    B5 = 14,
    C6 = 15,
    D6 = 16,
    E6 = 17,
    F6 = 18,
    G6 = 19,
    A6 = 20,
    B6 = 21,
    C7 = 22,
}

/// Clock divider class selecting a pitch band.
///
/// Lower pitches need a larger reload range at a fixed counter width,
/// so lower bands divide the clock harder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prescaler {
    Div32,
    Div64,
    Div128,
}

impl Prescaler {
    /// Clock division factor.
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Div32 => 32,
            Prescaler::Div64 => 64,
            Prescaler::Div128 => 128,
        }
    }
}

/// Timer programming for one audible tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneSettings {
    /// Clock prescaler class (pitch band).
    pub prescaler: Prescaler,
    /// Compare/reload value; the counter wraps at this value.
    pub reload: u8,
}

impl ToneSettings {
    /// Output frequency for a given timer base clock.
    ///
    /// One counter wrap produces one output period, so
    /// `f = clock / divisor / (reload + 1)`.
    pub fn frequency_hz(&self, clock_hz: u32) -> u32 {
        clock_hz / self.prescaler.divisor() / (self.reload as u32 + 1)
    }
}

/// Reload values for the seven diatonic pitches, indexed by `raw % 7`
/// (B, C, D, E, F, G, A). Shared across all three bands.
const RELOADS: [u8; 7] = [252, 238, 212, 189, 178, 158, 141];

impl Tone {
    /// Decode a raw melody byte. `None` for values outside the defined
    /// tone range.
    pub fn from_raw(raw: u8) -> Option<Tone> {
        Some(match raw {
            0 => Tone::Silence,
            7 => Tone::B4,
            8 => Tone::C5,
            9 => Tone::D5,
            10 => Tone::E5,
            11 => Tone::F5,
            12 => Tone::G5,
            13 => Tone::A5,
            14 => Tone::B5,
            15 => Tone::C6,
            16 => Tone::D6,
            17 => Tone::E6,
            18 => Tone::F6,
            19 => Tone::G6,
            20 => Tone::A6,
            21 => Tone::B6,
            22 => Tone::C7,
            _ => return None,
        })
    }

    /// Timer settings for this tone, or `None` for [`Tone::Silence`].
    pub fn settings(self) -> Option<ToneSettings> {
        let raw = self as u8;
        let prescaler = match raw {
            7..=13 => Prescaler::Div128,
            14..=20 => Prescaler::Div64,
            21..=22 => Prescaler::Div32,
            _ => return None, // silence
        };
        Some(ToneSettings {
            prescaler,
            reload: RELOADS[(raw % 7) as usize],
        })
    }
}

impl TryFrom<u8> for Tone {
    type Error = InvalidTone;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Tone::from_raw(raw).ok_or(InvalidTone(raw))
    }
}
