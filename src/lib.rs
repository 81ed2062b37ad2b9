//! bleep - melody buzzer driver for a battery-powered BLE accessory.
//!
//! The interesting part of this firmware is the tone sequencer: a
//! driver that walks a compact in-memory melody (tone/duration pairs),
//! reprograms a counter/timer channel for each note, and advances on
//! timer-expiry notifications from the host scheduler instead of
//! blocking. Everything hardware-specific sits behind two small traits,
//! so the whole state machine builds and tests on the host
//! (`cargo test --lib`); the embedded binary in `main.rs` needs the
//! `embedded` feature and an nRF52840.

#![cfg_attr(not(test), no_std)]

pub mod buzzer;
pub mod config;
pub mod error;
pub mod input;

#[cfg(feature = "embedded")]
pub mod hw;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - tone table and melody wire format
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::buzzer::{Note, Prescaler, Tone, NOTE_SIZE};
    use crate::config::{CONNECT_CHIME, MELODY_CAPACITY_BYTES, PWM_CLOCK_HZ};
    use crate::error::InvalidTone;

    const ALL_TONES: [Tone; 16] = [
        Tone::B4,
        Tone::C5,
        Tone::D5,
        Tone::E5,
        Tone::F5,
        Tone::G5,
        Tone::A5,
        Tone::B5,
        Tone::C6,
        Tone::D6,
        Tone::E6,
        Tone::F6,
        Tone::G6,
        Tone::A6,
        Tone::B6,
        Tone::C7,
    ];

    // ════════════════════════════════════════════════════════════════════════
    // Tone Table Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn silence_has_no_settings() {
        assert!(Tone::Silence.settings().is_none());
    }

    #[test]
    fn every_tone_has_a_valid_reload() {
        for tone in ALL_TONES {
            let s = tone.settings().unwrap();
            // The hand-fitted table spans 141..=252; anything outside
            // would either overflow the register or whistle ultrasonic.
            assert!((141..=252).contains(&s.reload), "{:?}", tone);
        }
    }

    #[test]
    fn bands_pick_coarser_prescalers_for_lower_pitches() {
        for tone in ALL_TONES {
            let expected = match tone as u8 {
                7..=13 => Prescaler::Div128,
                14..=20 => Prescaler::Div64,
                _ => Prescaler::Div32,
            };
            assert_eq!(tone.settings().unwrap().prescaler, expected);
        }
    }

    #[test]
    fn tones_seven_apart_share_reload_across_bands() {
        let pairs = [
            (Tone::B4, Tone::B5),
            (Tone::C5, Tone::C6),
            (Tone::A5, Tone::A6),
            (Tone::B5, Tone::B6),
            (Tone::C6, Tone::C7),
        ];
        for (low, high) in pairs {
            let l = low.settings().unwrap();
            let h = high.settings().unwrap();
            assert_eq!(l.reload, h.reload);
            assert_ne!(l.prescaler, h.prescaler);
            assert_eq!(l.prescaler.divisor(), h.prescaler.divisor() * 2);
        }
    }

    #[test]
    fn frequencies_land_near_equal_temperament() {
        // The reload table was fitted by hand, so allow ~1% slack.
        let expected = [
            (Tone::B4, 494),
            (Tone::C5, 523),
            (Tone::A5, 880),
            (Tone::B5, 988),
            (Tone::C6, 1047),
            (Tone::C7, 2093),
        ];
        for (tone, target_hz) in expected {
            let hz = tone.settings().unwrap().frequency_hz(PWM_CLOCK_HZ) as i32;
            let err = (hz - target_hz).abs();
            assert!(err * 100 <= target_hz, "{:?}: {} Hz vs {}", tone, hz, target_hz);
        }
    }

    #[test]
    fn prescaler_divisors() {
        assert_eq!(Prescaler::Div32.divisor(), 32);
        assert_eq!(Prescaler::Div64.divisor(), 64);
        assert_eq!(Prescaler::Div128.divisor(), 128);
    }

    #[test]
    fn tone_from_raw_round_trips() {
        assert_eq!(Tone::from_raw(0), Some(Tone::Silence));
        for tone in ALL_TONES {
            assert_eq!(Tone::from_raw(tone as u8), Some(tone));
        }
    }

    #[test]
    fn tone_from_raw_rejects_gaps_and_overflow() {
        for raw in 1..=6u8 {
            assert_eq!(Tone::from_raw(raw), None);
        }
        assert_eq!(Tone::from_raw(23), None);
        assert_eq!(Tone::from_raw(0xFF), None);
    }

    #[test]
    fn tone_try_from_reports_the_offending_byte() {
        assert_eq!(Tone::try_from(5).unwrap_err(), InvalidTone(5));
        assert_eq!(Tone::try_from(22).unwrap(), Tone::C7);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Melody Wire Format Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn note_from_bytes_parses_a_pair() {
        let note = Note::from_bytes(&[Tone::C6 as u8, 5]).unwrap();
        assert_eq!(note.tone, Tone::C6);
        assert_eq!(note.ticks, 5);
        assert_eq!(note.duration_ms(), 125);
    }

    #[test]
    fn note_from_bytes_ignores_trailing_bytes() {
        let note = Note::from_bytes(&[Tone::A5 as u8, 2, 0xFF, 0xFF]).unwrap();
        assert_eq!(note.tone, Tone::A5);
        assert_eq!(note.ticks, 2);
    }

    #[test]
    fn note_from_short_bytes_fails() {
        assert!(Note::from_bytes(&[]).is_none());
        assert!(Note::from_bytes(&[Tone::C6 as u8]).is_none());
    }

    #[test]
    fn note_with_undefined_tone_byte_decodes_as_silence() {
        let note = Note::from_bytes(&[3, 8]).unwrap();
        assert_eq!(note.tone, Tone::Silence);
        assert_eq!(note.ticks, 8);
    }

    #[test]
    fn note_serialize_roundtrip() {
        let original = Note {
            tone: Tone::G6,
            ticks: 12,
        };
        let mut buf = [0u8; NOTE_SIZE];
        assert_eq!(original.serialize(&mut buf), NOTE_SIZE);
        assert_eq!(buf, [Tone::G6 as u8, 12]);
        assert_eq!(Note::from_bytes(&buf), Some(original));
    }

    #[test]
    fn note_serialize_buffer_too_small() {
        let note = Note {
            tone: Tone::C6,
            ticks: 1,
        };
        let mut buf = [0u8; 1];
        assert_eq!(note.serialize(&mut buf), 0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Button Input Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn short_press_chimes_long_press_stops() {
        use crate::config::BUTTON_LONG_PRESS_MS;
        use crate::input::{classify_press, BuzzerCmd};

        assert_eq!(classify_press(0), BuzzerCmd::Chime);
        assert_eq!(classify_press(BUTTON_LONG_PRESS_MS - 1), BuzzerCmd::Chime);
        assert_eq!(classify_press(BUTTON_LONG_PRESS_MS), BuzzerCmd::Stop);
        assert_eq!(classify_press(u64::MAX), BuzzerCmd::Stop);
    }

    #[test]
    fn connect_chime_is_well_formed() {
        assert!(CONNECT_CHIME.len() <= MELODY_CAPACITY_BYTES);
        assert_eq!(CONNECT_CHIME.len() % NOTE_SIZE, 0);

        let mut last_period = u32::MAX;
        for pair in CONNECT_CHIME.chunks(NOTE_SIZE) {
            let note = Note::from_bytes(pair).unwrap();
            assert_eq!(note.ticks, 5);
            // Ascending scale: each step has a strictly shorter period.
            let s = note.tone.settings().unwrap();
            let period = (s.reload as u32 + 1) * s.prescaler.divisor();
            assert!(period < last_period, "{:?} does not ascend", note.tone);
            last_period = period;
        }
    }
}
