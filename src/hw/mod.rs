//! nRF52840 bindings for the buzzer driver (embedded builds only).

pub mod button;
pub mod host;
pub mod pwm;

pub use host::TaskHost;
pub use pwm::PwmTone;

pub use crate::input::BuzzerCmd;
