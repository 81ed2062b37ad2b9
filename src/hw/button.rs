//! GPIO button input with async debouncing.
//!
//! A single push button (active-low with internal pull-up). The task
//! waits for a GPIO edge, debounces it, measures how long the button
//! was held, and sends the resulting command to the buzzer channel: a
//! short press chimes, a long press aborts playback.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Timer};

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::input::{classify_press, BuzzerCmd};

/// Run the button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, then classifies
/// the press by its duration on release.
pub async fn button_task(
    pin: AnyPin,
    tx: &Sender<'static, CriticalSectionRawMutex, BuzzerCmd, 4>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if btn.is_low() {
            let pressed_at = Instant::now();
            btn.wait_for_rising_edge().await;
            let held_ms = pressed_at.elapsed().as_millis();
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

            let cmd = classify_press(held_ms);
            info!("Button: {} after {} ms", cmd, held_ms);
            tx.send(cmd).await;
        }
    }
}
