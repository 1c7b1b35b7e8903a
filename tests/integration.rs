//! Integration tests for joystick-oled host-testable logic.
//!
//! Each test plays the role of the firmware: button edges arrive with a
//! timestamp, the main loop samples, drives the LEDs and renders a frame.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use joystick_oled::app::drive_leds;
use joystick_oled::handlers::{JoystickButton, PwmButton};
use joystick_oled::joystick::JoystickSample;
use joystick_oled::outputs::{DutyOutput, SwitchOutput};
use joystick_oled::render::render_frame;
use joystick_oled::state::{BorderStyle, SharedState};

struct Canvas {
    pixels: [[bool; 128]; 64],
}

impl Canvas {
    fn new() -> Self {
        Self {
            pixels: [[false; 128]; 64],
        }
    }

    fn on(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if (0..128).contains(&p.x) && (0..64).contains(&p.y) {
                self.pixels[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct Duty(u16);

impl DutyOutput for Duty {
    fn set_level(&mut self, level: u16) {
        self.0 = level;
    }
}

#[derive(Default)]
struct Led(bool);

impl SwitchOutput for Led {
    fn set_on(&mut self, on: bool) {
        self.0 = on;
    }
}

#[test]
fn centered_stick_draws_marker_at_64_16() {
    let state = SharedState::new();
    let mut canvas = Canvas::new();

    render_frame(&mut canvas, JoystickSample::new(2048, 1024), state.border()).unwrap();

    assert!(canvas.on(64, 16));
    assert!(canvas.on(71, 23));
    assert!(!canvas.on(63, 15));
}

#[test]
fn two_presses_50ms_apart_mutate_once() {
    let state = SharedState::new();
    let mut led = Led::default();
    let mut button = JoystickButton::default();

    assert_eq!(
        button.on_falling_edge(5_000, &state, &mut led),
        Some(BorderStyle::Rectangle)
    );
    assert_eq!(button.on_falling_edge(5_050, &state, &mut led), None);

    assert_eq!(state.border(), BorderStyle::Rectangle);
    assert!(state.led_on());
}

#[test]
fn three_spaced_presses_return_border_to_start() {
    let state = SharedState::new();
    let mut led = Led::default();
    let mut button = JoystickButton::default();
    let start = state.border();

    for press in 0..3u64 {
        assert!(button
            .on_falling_edge(1_000 + press * 250, &state, &mut led)
            .is_some());
    }

    assert_eq!(state.border(), start);
    // Odd number of toggles leaves the green LED on.
    assert!(led.0);
}

#[test]
fn disabling_pwm_zeroes_leds_until_reenabled() {
    let state = SharedState::new();
    let mut red = Duty::default();
    let mut blue = Duty::default();
    let mut button = PwmButton::default();

    // Frame with PWM on: LEDs follow the stick.
    drive_leds(&state, JoystickSample::new(3000, 1500), &mut red, &mut blue);
    assert_eq!((red.0, blue.0), (3000, 1500));

    // Button A turns PWM off and forces both to zero.
    assert_eq!(
        button.on_falling_edge(1_000, &state, &mut red, &mut blue),
        Some(false)
    );
    assert_eq!((red.0, blue.0), (0, 0));

    // Further frames leave them dark.
    drive_leds(&state, JoystickSample::new(4095, 4095), &mut red, &mut blue);
    assert_eq!((red.0, blue.0), (0, 0));

    // Re-enable: the next frame picks the stick up again.
    assert_eq!(
        button.on_falling_edge(1_300, &state, &mut red, &mut blue),
        Some(true)
    );
    drive_leds(&state, JoystickSample::new(10, 20), &mut red, &mut blue);
    assert_eq!((red.0, blue.0), (10, 20));
}

#[test]
fn border_choice_reaches_the_frame() {
    let state = SharedState::new();
    let mut led = Led::default();
    let mut button = JoystickButton::default();
    let sample = JoystickSample::new(2048, 1024);

    button.on_falling_edge(1_000, &state, &mut led);
    let mut canvas = Canvas::new();
    render_frame(&mut canvas, sample, state.border()).unwrap();
    assert!(canvas.on(0, 0));
    assert!(canvas.on(127, 63));

    button.on_falling_edge(1_300, &state, &mut led);
    let mut canvas = Canvas::new();
    render_frame(&mut canvas, sample, state.border()).unwrap();
    assert_eq!(state.border(), BorderStyle::Circle);
    assert!(!canvas.on(0, 0));
    assert!((92..=96).any(|x| canvas.on(x, 32)));
}
