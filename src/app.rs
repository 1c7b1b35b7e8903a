//! Hardware-independent half of the main loop.
//!
//! One iteration on target is: sample the ADC, [`drive_leds`],
//! [`render_frame`](crate::render::render_frame), flush the OLED, sleep
//! `FRAME_PERIOD_MS`. The sampling, flushing and sleeping live in the
//! firmware binary.

use crate::joystick::JoystickSample;
use crate::outputs::{clamp_level, DutyOutput};
use crate::state::SharedState;

/// Mirror the joystick onto the PWM LEDs: red follows X, blue follows Y,
/// using the raw sample as duty level.
///
/// Writes nothing while PWM is disabled; the LEDs were already zeroed by
/// the button handler. Returns whether the LEDs were updated.
pub fn drive_leds(
    state: &SharedState,
    sample: JoystickSample,
    red: &mut impl DutyOutput,
    blue: &mut impl DutyOutput,
) -> bool {
    if !state.pwm_enabled() {
        return false;
    }

    red.set_level(clamp_level(sample.x));
    blue.set_level(clamp_level(sample.y));
    true
}
