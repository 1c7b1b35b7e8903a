//! Unified error type for joystick-oled.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

/// Top-level error type used across the application.
///
/// None of these are fatal once the firmware is running: the main loop
/// logs them and carries on with the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Analog input
    /// An ADC conversion for one of the joystick axes failed.
    Adc(Axis),

    // Display
    /// Drawing into the frame buffer or pushing it over I²C failed.
    Display,
}

/// Joystick axis, used to tag ADC failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// Convenience alias for fallible operations.
pub type Result<T> = core::result::Result<T, Error>;
