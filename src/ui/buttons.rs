//! GPIO button tasks.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - joystick SW - toggle the green LED, cycle the border style
//!   - A           - enable/disable the joystick-driven PWM LEDs
//!
//! Each task sleeps until the GPIO interrupt reports a falling edge, then
//! hands the edge to its handler, which decides whether it is a press or
//! contact bounce. Nothing here waits for release; the 200 ms quiet window
//! covers both the press and the release bounce.

use defmt::{debug, info};
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use joystick_oled::handlers::{JoystickButton, PwmButton};
use joystick_oled::state::SharedState;

use crate::board::leds::{GreenLed, SharedLeds};

#[embassy_executor::task]
pub async fn joystick_button_task(
    mut btn: Input<'static>,
    mut green: GreenLed,
    state: &'static SharedState,
) {
    let mut handler = JoystickButton::default();

    loop {
        btn.wait_for_falling_edge().await;
        let now = Instant::now().as_millis();

        match handler.on_falling_edge(now, state, &mut green) {
            Some(border) => info!("Joystick button: led={} border={}", state.led_on(), border),
            None => debug!("Joystick button: bounce at {} ms ignored", now),
        }
    }
}

#[embassy_executor::task]
pub async fn pwm_button_task(
    mut btn: Input<'static>,
    leds: &'static SharedLeds,
    state: &'static SharedState,
) {
    let mut handler = PwmButton::default();

    loop {
        btn.wait_for_falling_edge().await;
        let now = Instant::now().as_millis();

        let outcome = leds.lock(|cell| {
            let leds = &mut *cell.borrow_mut();
            handler.on_falling_edge(now, state, &mut leds.red, &mut leds.blue)
        });

        match outcome {
            Some(enabled) => info!("Button A: pwm_enabled={}", enabled),
            None => debug!("Button A: bounce at {} ms ignored", now),
        }
    }
}
