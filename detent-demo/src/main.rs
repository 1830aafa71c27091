//! Detent Demo Firmware
//!
//! Encoder on TIM3 (PA6=A, PA7=B) of an STM32F411 "Black Pill" editing a
//! small settings page. The KEY button (PA0) selects the next setting.
//! Value changes are logged over RTT.

#![no_std]
#![no_main]

mod menu;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::Pull;
use embassy_stm32::peripherals::TIM3;
use embassy_stm32::timer::qei::{Qei, QeiPin};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use crate::menu::{Menu, Setting};
use detent_core::{AdjustRange, CycleMode, Encoder, EncoderConfig};
use detent_hal_stm32::{EmbassyClock, TimerEncoder};

bind_interrupts!(struct Irqs {
    EXTI0 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI0>;
});

type MenuEncoder = Encoder<TimerEncoder<'static, TIM3>, EmbassyClock>;

/// Shared menu state
static MENU: Mutex<CriticalSectionRawMutex, Menu> = Mutex::new(Menu::new());

/// Signal carrying the setting that just changed
static SETTING_CHANGED: Signal<CriticalSectionRawMutex, Setting> = Signal::new();

/// Encoder poll interval
const POLL_MS: u64 = 5;

/// Direction timeout; longer than the poll interval so a stored direction
/// survives between polls
const DIR_TIMEOUT_MS: u32 = 150;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent demo starting...");

    let p = embassy_stm32::init(Default::default());

    // Timer in encoder mode, counting both edges of both channels
    let qei = Qei::new(p.TIM3, QeiPin::new_ch1(p.PA6), QeiPin::new_ch2(p.PA7));
    let counter = TimerEncoder::new(qei, embassy_stm32::pac::TIM3);

    let mut encoder = Encoder::with_config(counter, EmbassyClock, EncoderConfig::new(DIR_TIMEOUT_MS));
    encoder.set_position(0);

    {
        let mut menu = MENU.lock().await;
        let settings = [
            Setting::new("Brightness", 5, unwrap!(AdjustRange::new(0, 10, CycleMode::Off))),
            Setting::new("Channel", 1, unwrap!(AdjustRange::new(1, 16, CycleMode::On))),
            Setting::new("Volume", 20, unwrap!(AdjustRange::new(0, 100, CycleMode::Off))),
        ];
        for setting in settings {
            if menu.push(setting).is_err() {
                warn!("Menu full, dropping {}", setting.label);
            }
        }
    }

    let button = ExtiInput::new(p.PA0, p.EXTI0, Pull::Up, Irqs);

    // Spawn tasks
    spawner.spawn(encoder_task(encoder)).unwrap();
    spawner.spawn(button_task(button)).unwrap();
    spawner.spawn(report_task()).unwrap();

    info!("All tasks spawned");
}

/// Encoder polling task
#[embassy_executor::task]
async fn encoder_task(mut encoder: MenuEncoder) {
    info!("Encoder task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS));

    loop {
        ticker.next().await;

        let changed = {
            let mut menu = MENU.lock().await;
            menu.adjust_selected(&mut encoder)
        };

        if let Some(setting) = changed {
            trace!("Position {}", encoder.read_position());
            SETTING_CHANGED.signal(setting);
        }
    }
}

/// Button press task
#[embassy_executor::task]
async fn button_task(mut btn: ExtiInput<'static>) {
    info!("Button task started");

    loop {
        btn.wait_for_falling_edge().await;

        // Debounce
        Timer::after(Duration::from_millis(20)).await;

        if btn.is_low() {
            let selected = {
                let mut menu = MENU.lock().await;
                menu.select_next();
                menu.selected().copied()
            };

            if let Some(setting) = selected {
                debug!("Selected {}", setting.label);
                SETTING_CHANGED.signal(setting);
            }

            btn.wait_for_rising_edge().await;

            // Debounce after release
            Timer::after(Duration::from_millis(50)).await;
        }
    }
}

/// Value reporting task
#[embassy_executor::task]
async fn report_task() {
    info!("Report task started");

    loop {
        let setting = SETTING_CHANGED.wait().await;
        info!("{} = {}", setting.label, setting.value);
    }
}
