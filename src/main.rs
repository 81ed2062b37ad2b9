//! Embedded entry point (nRF52840).
//!
//! Wires the button to the buzzer task. The buzzer task owns the
//! sequencer; all "waiting" for a note to finish happens here as a
//! `select` between the command channel and the armed deadline, so the
//! driver itself never blocks.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Pin;
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::Timer;
use panic_probe as _;

use bleep::buzzer::Sequencer;
use bleep::config;
use bleep::hw::{button, BuzzerCmd, PwmTone, TaskHost};

static BUZZER_CMDS: Channel<CriticalSectionRawMutex, BuzzerCmd, 4> = Channel::new();

type BoardSequencer = Sequencer<'static, PwmTone<'static, PWM0>, TaskHost>;

#[embassy_executor::task]
async fn buzzer_task(
    mut seq: BoardSequencer,
    rx: Receiver<'static, CriticalSectionRawMutex, BuzzerCmd, 4>,
) {
    loop {
        match seq.host().deadline() {
            Some(at) => match select(rx.receive(), Timer::at(at)).await {
                Either::First(cmd) => dispatch(&mut seq, cmd),
                Either::Second(()) => seq.on_duration_expired(),
            },
            None => {
                let cmd = rx.receive().await;
                dispatch(&mut seq, cmd);
            }
        }
    }
}

fn dispatch(seq: &mut BoardSequencer, cmd: BuzzerCmd) {
    match cmd {
        BuzzerCmd::Chime => {
            let truncated = seq.play(&config::CONNECT_CHIME, None);
            debug_assert!(!truncated);
        }
        BuzzerCmd::Stop => seq.stop(),
    }
}

#[embassy_executor::task]
async fn button_runner(pin: embassy_nrf::gpio::AnyPin) {
    button::button_task(pin, &BUZZER_CMDS.sender()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("bleep starting");

    // Buzzer on P0.14 via PWM0, button on P0.11 (see config.rs).
    let pwm = SimplePwm::new_1ch(p.PWM0, p.P0_14);
    let mut seq = Sequencer::new(PwmTone::new(pwm), TaskHost::new());
    seq.init();

    spawner.spawn(buzzer_task(seq, BUZZER_CMDS.receiver())).unwrap();
    spawner.spawn(button_runner(p.P0_11.degrade())).unwrap();
}
