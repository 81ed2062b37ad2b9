//! Host hooks for the buzzer task.
//!
//! The sequencer "arms a one-shot timer" by recording a deadline here;
//! the owning task selects on that deadline and feeds the expiry back
//! into the driver. Power hints are logged - on this board the PWM
//! peripheral requests its own clock while enabled, so there is no
//! register to poke, but the hint still marks the audible session for
//! the power manager.

use defmt::info;
use embassy_time::{Duration, Instant};

use crate::buzzer::Host;

/// Scheduler state owned by the buzzer task.
pub struct TaskHost {
    deadline: Option<Instant>,
}

impl TaskHost {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Deadline of the armed note timer, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for TaskHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TaskHost {
    fn arm_note_timer(&mut self, ms: u32) {
        self.deadline = Some(Instant::now() + Duration::from_millis(ms as u64));
    }

    fn cancel_note_timer(&mut self) {
        self.deadline = None;
    }

    fn hold_awake(&mut self) {
        info!("buzzer: session start, holding system awake");
    }

    fn allow_sleep(&mut self) {
        info!("buzzer: idle, system may sleep");
    }
}
