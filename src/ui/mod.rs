//! User interface subsystem - OLED display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, redrawn every frame by the
//!   main loop
//! - **Buttons**: 2 tactile switches, one Embassy task each, debounced in
//!   software (joystick SW, A)

pub mod buttons;
pub mod display;
