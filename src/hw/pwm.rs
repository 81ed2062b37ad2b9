//! Square-wave tone output over the nRF52 PWM peripheral.
//!
//! The tone table speaks in {prescaler class, 8-bit reload}; the nRF
//! PWM maps onto that directly: its 16 MHz base clock divided by
//! Div32/64/128 and a countertop of `reload + 1` produces one output
//! period per counter wrap. At 50% duty that is the same square wave a
//! toggle-on-compare timer would generate.

use embassy_nrf::pwm::{Instance, Prescaler as PwmPrescaler, SimplePwm};

use crate::buzzer::{Prescaler, ToneOutput, ToneSettings};

/// One PWM channel driving the buzzer pin.
pub struct PwmTone<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
}

impl<'d, T: Instance> PwmTone<'d, T> {
    pub fn new(pwm: SimplePwm<'d, T>) -> Self {
        let mut out = Self { pwm };
        out.silence();
        out
    }
}

fn map_prescaler(prescaler: Prescaler) -> PwmPrescaler {
    match prescaler {
        Prescaler::Div32 => PwmPrescaler::Div32,
        Prescaler::Div64 => PwmPrescaler::Div64,
        Prescaler::Div128 => PwmPrescaler::Div128,
    }
}

impl<T: Instance> ToneOutput for PwmTone<'_, T> {
    fn play_tone(&mut self, settings: ToneSettings) {
        let top = settings.reload as u16 + 1;
        self.pwm.set_prescaler(map_prescaler(settings.prescaler));
        self.pwm.set_max_duty(top);
        self.pwm.set_duty(0, top / 2);
        self.pwm.enable();
    }

    fn silence(&mut self) {
        // Disabling the peripheral parks the pin at its idle level.
        self.pwm.disable();
    }
}
