//! Output seams driven by the button handlers and the main loop.
//!
//! The firmware implements these on top of `embassy_rp` PWM slices and
//! GPIO outputs; tests implement them on plain structs.

use crate::config::PWM_TOP;

/// A proportional (duty-cycle) output, e.g. a PWM-dimmed LED.
pub trait DutyOutput {
    /// Set the duty level, `0..=PWM_TOP`. Larger values saturate.
    fn set_level(&mut self, level: u16);

    /// Shorthand for `set_level(0)`.
    fn off(&mut self) {
        self.set_level(0);
    }
}

/// An on/off output, e.g. the green status LED.
pub trait SwitchOutput {
    fn set_on(&mut self, on: bool);
}

/// Clamp a requested duty level to the PWM range.
pub fn clamp_level(level: u16) -> u16 {
    level.min(PWM_TOP)
}
