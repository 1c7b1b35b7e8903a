//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display geometry
//! live here so they can be tuned in one place.

// Timing

/// Minimum quiet window between two accepted presses of the same button (ms).
pub const DEBOUNCE_MS: u64 = 200;

/// Delay between two frames of the main loop (ms). Keeps the OLED from
/// flickering; not a precise timing guarantee.
pub const FRAME_PERIOD_MS: u64 = 10;

// Analog input / PWM output

/// Largest raw joystick sample (12-bit ADC).
pub const ADC_MAX: u16 = 4095;

/// PWM counter wrap value. Matches `ADC_MAX` so a raw sample can be used
/// directly as a duty level.
pub const PWM_TOP: u16 = 4095;

// Display

/// OLED width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// OLED height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// 7-bit I²C address of the SSD1306.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I²C bus clock for the OLED (Hz).
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

/// Edge length of the joystick marker square (pixels).
pub const MARKER_SIZE: u32 = 8;

/// Radius of the circular border decoration (pixels).
pub const BORDER_CIRCLE_RADIUS: u32 = 30;

// GPIO pin assignments (BitDogLab / Raspberry Pi Pico)
//
// These are logical names; the concrete `embassy_rp::peripherals::*`
// instances are picked in `main.rs`.  Adjust for your own carrier board.
//
//   Joystick X     → GPIO26 (ADC0)
//   Joystick Y     → GPIO27 (ADC1)
//   Joystick SW    → GPIO22 (active-low, pull-up)
//   Button A       → GPIO5  (active-low, pull-up)
//   LED red        → GPIO11 (PWM slice 5, channel B)
//   LED green      → GPIO12 (plain output)
//   LED blue       → GPIO13 (PWM slice 6, channel B)
//   I²C1 SDA       → GPIO14
//   I²C1 SCL       → GPIO15
