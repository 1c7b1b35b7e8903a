//! RGB LED outputs.
//!
//! Red and blue are PWM-dimmed from the joystick axes; both sit on channel
//! B of their slice (GPIO11 → slice 5, GPIO13 → slice 6). Green is a plain
//! on/off GPIO.

use core::cell::RefCell;

use embassy_rp::gpio::Output;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use joystick_oled::config::PWM_TOP;
use joystick_oled::outputs::{clamp_level, DutyOutput, SwitchOutput};

/// The two PWM LEDs, shared by the main loop (levels) and the button-A
/// task (forced zero).
pub type SharedLeds = Mutex<CriticalSectionRawMutex, RefCell<LedPair>>;

pub struct LedPair {
    pub red: PwmLed,
    pub blue: PwmLed,
}

/// One LED on channel B of a PWM slice, 12-bit duty.
pub struct PwmLed {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl PwmLed {
    /// Slice configuration: wrap at `PWM_TOP`, start dark.
    pub fn config() -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_b = 0;
        config
    }

    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let config = Self::config();
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl DutyOutput for PwmLed {
    fn set_level(&mut self, level: u16) {
        self.config.compare_b = clamp_level(level);
        self.pwm.set_config(&self.config);
    }
}

pub struct GreenLed(Output<'static>);

impl GreenLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl SwitchOutput for GreenLed {
    fn set_on(&mut self, on: bool) {
        if on {
            self.0.set_high();
        } else {
            self.0.set_low();
        }
    }
}
