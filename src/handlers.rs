//! Button activation handlers.
//!
//! Each handler owns the debounce trigger for its button and is the single
//! writer of its part of [`SharedState`]. Handlers are short and never
//! block: one time comparison, then at most one state change plus its
//! output side effect.

use crate::debounce::EdgeTrigger;
use crate::outputs::{DutyOutput, SwitchOutput};
use crate::state::{BorderStyle, SharedState};

/// Joystick push button: toggles the green LED and cycles the border.
#[derive(Debug, Default)]
pub struct JoystickButton {
    trigger: EdgeTrigger,
}

impl JoystickButton {
    pub const fn new(trigger: EdgeTrigger) -> Self {
        Self { trigger }
    }

    /// Handle one falling edge seen at `now_ms`.
    ///
    /// Returns the new border style, or `None` when the edge was debounced
    /// away and nothing changed.
    pub fn on_falling_edge(
        &mut self,
        now_ms: u64,
        state: &SharedState,
        green_led: &mut impl SwitchOutput,
    ) -> Option<BorderStyle> {
        if !self.trigger.fire(now_ms) {
            return None;
        }

        let on = state.toggle_led();
        green_led.set_on(on);
        Some(state.advance_border())
    }

    pub fn trigger(&self) -> &EdgeTrigger {
        &self.trigger
    }
}

/// Button A: enables/disables the joystick-driven PWM LEDs.
#[derive(Debug, Default)]
pub struct PwmButton {
    trigger: EdgeTrigger,
}

impl PwmButton {
    pub const fn new(trigger: EdgeTrigger) -> Self {
        Self { trigger }
    }

    /// Handle one falling edge seen at `now_ms`.
    ///
    /// Returns the new PWM-enable flag, or `None` when debounced. Turning
    /// PWM off writes zero to both LEDs once; nothing re-asserts it later.
    pub fn on_falling_edge(
        &mut self,
        now_ms: u64,
        state: &SharedState,
        red: &mut impl DutyOutput,
        blue: &mut impl DutyOutput,
    ) -> Option<bool> {
        if !self.trigger.fire(now_ms) {
            return None;
        }

        let enabled = state.toggle_pwm();
        if !enabled {
            red.off();
            blue.off();
        }
        Some(enabled)
    }

    pub fn trigger(&self) -> &EdgeTrigger {
        &self.trigger
    }
}
