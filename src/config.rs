//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and melody
//! constants live here so they can be tuned in one place.

use crate::buzzer::Tone;

// Melody encoding

/// Maximum encoded melody size in bytes (tone byte + duration byte per
/// note, so 16 notes). `play` silently clamps longer input.
pub const MELODY_CAPACITY_BYTES: usize = 32;

/// Duration unit of an encoded note (milliseconds per tick).
pub const TICK_MS: u32 = 25;

// Canonical melodies

/// Ascending C6..C7 scale, 125 ms per note. Played as key-press feedback.
pub const CONNECT_CHIME: [u8; 16] = [
    Tone::C6 as u8, 5,
    Tone::D6 as u8, 5,
    Tone::E6 as u8, 5,
    Tone::F6 as u8, 5,
    Tone::G6 as u8, 5,
    Tone::A6 as u8, 5,
    Tone::B6 as u8, 5,
    Tone::C7 as u8, 5,
];

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Buzzer (PWM0 out) → P0.14
//   Push button       → P0.11

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Holding the button at least this long aborts playback instead of
/// chiming.
pub const BUTTON_LONG_PRESS_MS: u64 = 2500;

/// PWM base clock feeding the tone prescalers (Hz).
pub const PWM_CLOCK_HZ: u32 = 16_000_000;
