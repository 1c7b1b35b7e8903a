//! joystick-oled - RP2040 firmware entry point.
//!
//! Reads an analog joystick, draws its position on an SSD1306 OLED and
//! mirrors it on the red/blue PWM LEDs. Two buttons toggle the green LED
//! + border style and the PWM LEDs respectively.
//!
//! Tasks:
//! - `main`: the polling loop (sample → LEDs → frame → sleep)
//! - `joystick_button_task`, `pwm_button_task`: GPIO edge handlers
//!
//! All state is volatile and resets on power cycle.

#![no_std]
#![no_main]

mod board;
mod ui;

use core::cell::RefCell;

use defmt::{info, panic, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::Pwm;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Timer;
use joystick_oled::app::drive_leds;
use joystick_oled::config::{DISPLAY_I2C_FREQUENCY_HZ, FRAME_PERIOD_MS};
use joystick_oled::state::SharedState;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::board::joystick_adc::JoystickAdc;
use crate::board::leds::{GreenLed, LedPair, PwmLed, SharedLeds};
use crate::ui::{buttons, display};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Flags written by the button tasks, read by the main loop.
static STATE: SharedState = SharedState::new();

static LEDS: StaticCell<SharedLeds> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("joystick-oled starting...");

    let p = embassy_rp::init(Default::default());

    // Joystick: X = GPIO26 (ADC0), Y = GPIO27 (ADC1)
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let x_axis = Channel::new_pin(p.PIN_26, Pull::None);
    let y_axis = Channel::new_pin(p.PIN_27, Pull::None);
    let mut joystick = JoystickAdc::new(adc, x_axis, y_axis);

    // RGB LED: red/blue dimmed via PWM, green switched
    let red = PwmLed::new(Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, PwmLed::config()));
    let blue = PwmLed::new(Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, PwmLed::config()));
    let leds: &'static SharedLeds = LEDS.init(Mutex::new(RefCell::new(LedPair { red, blue })));
    let green = GreenLed::new(Output::new(p.PIN_12, Level::Low));

    info!("ADC and LEDs initialized");

    // OLED on I2C1: SDA = GPIO14, SCL = GPIO15
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = DISPLAY_I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => panic!("OLED init failed: {}", e),
    };

    info!("OLED initialized");

    // Buttons: active-low, falling edge
    let joystick_btn = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);

    unwrap!(spawner.spawn(buttons::joystick_button_task(joystick_btn, green, &STATE)));
    unwrap!(spawner.spawn(buttons::pwm_button_task(button_a, leds, &STATE)));

    info!("Button tasks spawned, entering main loop");

    loop {
        match joystick.read().await {
            Ok(sample) => {
                leds.lock(|cell| {
                    let leds = &mut *cell.borrow_mut();
                    drive_leds(&STATE, sample, &mut leds.red, &mut leds.blue);
                });

                if let Err(e) = display::show(&mut oled, sample, STATE.border()) {
                    warn!("Frame dropped: {}", e);
                }
            }
            Err(e) => warn!("Joystick read failed: {}", e),
        }

        Timer::after_millis(FRAME_PERIOD_MS).await;
    }
}
