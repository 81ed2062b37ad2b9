//! Button press classification.
//!
//! Pure logic, kept out of `hw/` so it tests on the host: the button
//! task measures how long the pin was held and this decides what the
//! press means.

use crate::config::BUTTON_LONG_PRESS_MS;

/// Commands accepted by the buzzer task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerCmd {
    /// Play the key-press confirmation chime.
    Chime,
    /// Force-silence whatever is playing.
    Stop,
}

/// Map a press duration to a buzzer command: a short press chimes, a
/// long press aborts playback.
pub fn classify_press(held_ms: u64) -> BuzzerCmd {
    if held_ms >= BUTTON_LONG_PRESS_MS {
        BuzzerCmd::Stop
    } else {
        BuzzerCmd::Chime
    }
}
