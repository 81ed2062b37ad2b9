//! Buzzer subsystem: tone table, melody wire format, and the
//! event-driven sequencer that turns one into the other.

pub mod melody;
pub mod sequencer;
pub mod tone;


pub use melody::{Note, NOTE_SIZE};
pub use sequencer::{CompletionFn, Host, Sequencer, ToneOutput};
pub use tone::{Prescaler, Tone, ToneSettings};
