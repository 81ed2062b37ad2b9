//! Tone sequencer - event-driven melody playback over a single timer.
//!
//! The sequencer owns one hardware tone channel and a copy of the
//! current melody. It never blocks and never polls: after programming a
//! note it arms a one-shot duration timer with the host scheduler and
//! returns; the host calls [`Sequencer::on_duration_expired`] when that
//! timer fires, which either programs the next note or winds the driver
//! back to idle and fires the completion callback.
//!
//! While a note is sounding the timer hardware free-runs with no
//! software involvement, so the host may suspend the CPU - but not the
//! timer clock, which is why a power hint is held for the whole session.

use heapless::Vec;

use crate::buzzer::melody::{Note, NOTE_SIZE};
use crate::buzzer::tone::{Tone, ToneSettings};
use crate::config::MELODY_CAPACITY_BYTES;

/// Hardware seam: one square-wave tone channel.
///
/// Register writes are assumed to succeed unconditionally; neither
/// method returns an error.
pub trait ToneOutput {
    /// Route the output pin to the timer waveform, program the divider
    /// and reload value for toggle-on-compare, and start the counter.
    fn play_tone(&mut self, settings: ToneSettings);

    /// Stop the counter and return the pin to a plain idle GPIO level.
    /// Must be idempotent.
    fn silence(&mut self);
}

/// Host seam: the scheduler's one-shot note timer and the system power
/// hint.
///
/// The host guarantees single-threaded dispatch: `on_duration_expired`
/// is never re-entered, and a cancelled timer delivers no further
/// expiry.
pub trait Host {
    /// Arm the one-shot duration timer bound to this driver.
    fn arm_note_timer(&mut self, ms: u32);

    /// Cancel any pending duration timer. No-op when none is armed.
    fn cancel_note_timer(&mut self);

    /// Keep the clock this tone channel depends on running.
    fn hold_awake(&mut self);

    /// The tone channel is idle; the host may conserve power again.
    fn allow_sleep(&mut self);
}

/// Completion notification; taken out of the driver before invocation
/// so it fires at most once per play request.
pub type CompletionFn<'a> = &'a mut dyn FnMut();

/// Melody playback driver.
///
/// Exactly one instance should own a given tone channel. All state
/// lives here - there are no statics - so the "one active sequence"
/// invariant is the borrow checker's problem, not a convention.
pub struct Sequencer<'a, O: ToneOutput, H: Host> {
    out: O,
    host: H,
    melody: Vec<u8, MELODY_CAPACITY_BYTES>,
    /// Byte index of the next pair to play.
    cursor: usize,
    on_complete: Option<CompletionFn<'a>>,
    /// Power hint currently held.
    active: bool,
}

impl<'a, O: ToneOutput, H: Host> Sequencer<'a, O, H> {
    /// Create an idle driver around a tone channel and its host hooks.
    pub fn new(out: O, host: H) -> Self {
        Self {
            out,
            host,
            melody: Vec::new(),
            cursor: 0,
            on_complete: None,
            active: false,
        }
    }

    /// Idempotent (re-)initialisation: silence the hardware, drop any
    /// registered callback without firing it, reset the cursor.
    pub fn init(&mut self) {
        self.on_complete = None;
        self.stop();
    }

    /// Host access (e.g. for the owning task to read the armed
    /// deadline).
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Start playing an encoded melody, replacing whatever was playing.
    ///
    /// The previous sequence, if any, is abandoned without firing its
    /// callback; `on_complete` takes its place and fires exactly once
    /// when this melody finishes or is stopped. The pending duration
    /// timer is cancelled before the cursor and callback are touched,
    /// so a stale expiry can never observe a half-updated driver.
    ///
    /// Input longer than the capacity is clamped; returns `true` when
    /// that happened. An empty melody completes immediately (the
    /// callback fires from within this call).
    pub fn play(&mut self, bytes: &[u8], on_complete: Option<CompletionFn<'a>>) -> bool {
        self.host.cancel_note_timer();

        let truncated = bytes.len() > MELODY_CAPACITY_BYTES;
        let take = if truncated { MELODY_CAPACITY_BYTES } else { bytes.len() };
        self.melody.clear();
        // Always fits: `take` is bounded by the Vec capacity.
        let _ = self.melody.extend_from_slice(&bytes[..take]);
        self.cursor = 0;
        self.on_complete = on_complete;

        self.hold();
        self.advance();
        truncated
    }

    /// Sound a single note (or timed silence) for `duration_ms`.
    ///
    /// This is the primitive under each melody step; it programs the
    /// tone channel and (re-)arms the duration timer but leaves the
    /// melody cursor alone. On expiry the driver resumes whatever the
    /// cursor points at - for a standalone ring that is the end of the
    /// (empty) melody, i.e. `stop()`.
    pub fn ring(&mut self, duration_ms: u32, tone: Tone) {
        self.hold();
        match tone.settings() {
            Some(settings) => self.out.play_tone(settings),
            None => self.out.silence(),
        }
        // Replace, never stack: one pending expiry at most.
        self.host.cancel_note_timer();
        self.host.arm_note_timer(duration_ms);
    }

    /// Duration timer fired: play the next pair or finish.
    ///
    /// This is the sole driver of sequencing. A stray call while idle
    /// falls through to the idempotent `stop()` and is a no-op.
    pub fn on_duration_expired(&mut self) {
        self.advance();
    }

    /// Unconditionally silence output and return to idle.
    ///
    /// Cancels the pending duration timer, releases the power hint (at
    /// most once per session), then fires and clears the completion
    /// callback if one is registered. Safe to call at any time,
    /// including while already idle (then nothing fires and the hint
    /// stays released); calling it mid-sequence truncates playback.
    pub fn stop(&mut self) {
        self.out.silence();
        self.host.cancel_note_timer();

        // Forget the rest of the melody so a stray expiry has nothing
        // to resume.
        self.melody.clear();
        self.cursor = 0;

        if self.active {
            self.active = false;
            self.host.allow_sleep();
        }
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }

    /// Program the pair at the cursor and step past it, or stop when
    /// the cursor has reached the stored length (an odd trailing byte
    /// ends the sequence the same way).
    fn advance(&mut self) {
        match Note::from_bytes(&self.melody[self.cursor..]) {
            Some(note) => {
                self.cursor += NOTE_SIZE;
                self.ring(note.duration_ms(), note.tone);
            }
            None => self.stop(),
        }
    }

    /// Assert the power hint, at most once per active session.
    fn hold(&mut self) {
        if !self.active {
            self.active = true;
            self.host.hold_awake();
        }
    }
}
